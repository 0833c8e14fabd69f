use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use log::debug;
use rand::RngExt;
use tokio::net::UdpSocket;
use tokio::sync::watch;
use tokio::time::Instant;
use crate::client::enums::client_error::ClientError;
use crate::client::structs::tracker_client::TrackerClient;
use crate::common::common::shutdown_signalled;
use crate::protocol::enums::request::Request;
use crate::protocol::structs::get_request::GetRequest;
use crate::protocol::structs::keep_alive_request::KeepAliveRequest;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::protocol::structs::peers_response::PeersResponse;
use crate::protocol::structs::share_request::ShareRequest;
use crate::udp::udp::MAX_PACKET_SIZE;

impl TrackerClient {
    pub fn new(tracker_address: SocketAddr, request_timeout: Duration) -> TrackerClient
    {
        let mut rng = rand::rng();
        TrackerClient {
            tracker_address,
            request_timeout,
            request_id: AtomicU64::new(rng.random()),
            shutdown: None,
        }
    }

    /// Pending replies resolve with `ClientError::Cancelled` once `shutdown` flips.
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> TrackerClient
    {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn next_request_id(&self) -> u64
    {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn bind_ephemeral(&self) -> std::io::Result<UdpSocket>
    {
        let local: SocketAddr = if self.tracker_address.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        UdpSocket::bind(local).await
    }

    /// Sends `request` once and waits up to `timeout` for its reply.
    #[tracing::instrument(level = "debug")]
    pub async fn send_and_await(&self, request: &Request, timeout: Duration) -> Result<PeersResponse, ClientError>
    {
        let payload = request.to_bytes()?;
        let expected_id = match request {
            Request::Get(get_request) => get_request.request_id,
            _ => None
        };

        let socket = self.bind_ephemeral().await?;
        socket.send_to(&payload, self.tracker_address).await?;

        let deadline = Instant::now() + timeout;
        let mut shutdown = self.shutdown.clone();
        let mut buffer = vec![0u8; MAX_PACKET_SIZE];

        loop {
            let received = match shutdown.as_mut() {
                Some(shutdown) => {
                    tokio::select! {
                        _ = shutdown_signalled(shutdown) => return Err(ClientError::Cancelled),
                        received = tokio::time::timeout_at(deadline, socket.recv_from(&mut buffer)) => received,
                    }
                }
                None => tokio::time::timeout_at(deadline, socket.recv_from(&mut buffer)).await,
            };

            let (size, from) = match received {
                Ok(result) => result?,
                Err(_) => return Err(ClientError::NoResponse { timeout }),
            };

            if from != self.tracker_address {
                debug!("[CLIENT] Ignoring datagram from {from}, expected {}", self.tracker_address);
                continue;
            }

            let response = match PeersResponse::from_bytes(&buffer[..size]) {
                Ok(response) => response,
                Err(error) => {
                    debug!("[CLIENT] Ignoring unreadable reply from {from}: {error}");
                    continue;
                }
            };

            if matches!((expected_id, response.request_id), (Some(expected), Some(received)) if expected != received) {
                debug!("[CLIENT] Ignoring reply for request {:?}, expected {:?}", response.request_id, expected_id);
                continue;
            }

            return Ok(response);
        }
    }

    /// Sends `request` once without waiting for anything.
    #[tracing::instrument(level = "debug")]
    pub async fn send_fire_and_forget(&self, request: &Request) -> Result<(), ClientError>
    {
        let payload = request.to_bytes()?;
        let socket = self.bind_ephemeral().await?;
        socket.send_to(&payload, self.tracker_address).await?;
        Ok(())
    }

    pub async fn share(&self, file_name: &str, peer: PeerAddress) -> Result<(), ClientError>
    {
        self.send_fire_and_forget(&Request::from(ShareRequest {
            file_name: file_name.to_string(),
            peer,
        })).await
    }

    pub async fn keep_alive(&self, peer: PeerAddress) -> Result<(), ClientError>
    {
        self.send_fire_and_forget(&Request::from(KeepAliveRequest { peer })).await
    }

    /// Providers of `file_name`, waiting at most `request_timeout`.
    pub async fn get_peers(&self, file_name: &str) -> Result<Vec<PeerAddress>, ClientError>
    {
        let request = Request::from(GetRequest {
            file_name: file_name.to_string(),
            request_id: Some(self.next_request_id()),
        });
        let response = self.send_and_await(&request, self.request_timeout).await?;
        Ok(response.peers)
    }
}
