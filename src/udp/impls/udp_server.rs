use std::net::SocketAddr;
use std::sync::Arc;
use futures_util::future::join_all;
use log::{debug, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::sync::watch;
use crate::protocol::structs::peers_response::PeersResponse;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::file_tracker::FileTracker;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::udp::MAX_PACKET_SIZE;

impl UdpServer {
    #[tracing::instrument(level = "debug")]
    pub async fn new(tracker: Arc<FileTracker>, bind_address: SocketAddr, threads: u64, recv_buffer_size: usize, send_buffer_size: usize, reuse_address: bool) -> tokio::io::Result<UdpServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

        // Zero keeps the OS default.
        if recv_buffer_size > 0 {
            socket.set_recv_buffer_size(recv_buffer_size)?;
        }
        if send_buffer_size > 0 {
            socket.set_send_buffer_size(send_buffer_size)?;
        }
        socket.set_reuse_address(reuse_address)?;
        socket.bind(&bind_address.into())?;
        socket.set_nonblocking(true)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;

        let sock_ref = socket2::SockRef::from(&tokio_socket);
        debug!(
            "[UDP] Socket created with buffers - Recv: {} bytes, Send: {} bytes",
            sock_ref.recv_buffer_size().unwrap_or(0),
            sock_ref.send_buffer_size().unwrap_or(0)
        );

        Ok(UdpServer {
            socket: Arc::new(tokio_socket),
            tracker,
            threads: threads.max(1),
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.socket.local_addr()
    }

    /// Runs the receive tasks until `rx` flips to `true` or its sender is dropped.
    #[tracing::instrument(level = "debug")]
    pub async fn start(&self, rx: watch::Receiver<bool>)
    {
        let mut handles = Vec::with_capacity(self.threads as usize);
        for thread_id in 0..self.threads {
            let socket = self.socket.clone();
            let tracker = self.tracker.clone();
            let mut rx = rx.clone();

            handles.push(tokio::spawn(async move {
                let local_addr = socket.local_addr().map(|addr| addr.to_string()).unwrap_or_default();
                let mut data = vec![0u8; MAX_PACKET_SIZE];

                loop {
                    tokio::select! {
                        _ = rx.changed() => {
                            info!("[UDP] Stopping UDP server thread {thread_id}: {local_addr}...");
                            break;
                        }
                        result = socket.recv_from(&mut data) => {
                            match result {
                                Ok((valid_bytes, remote_addr)) => {
                                    debug!("[UDP] Thread {thread_id} received {valid_bytes} bytes from {remote_addr}");
                                    if let Some(response) = tracker.handle_packet(remote_addr, &data[..valid_bytes]) {
                                        UdpServer::send_response(tracker.clone(), socket.clone(), remote_addr, response).await;
                                    }
                                }
                                Err(error) => {
                                    // Windows reports ICMP port unreachable of an earlier send here.
                                    debug!("[UDP] Thread {thread_id} recv_from error: {error}");
                                }
                            }
                        }
                    }
                }
            }));
        }

        join_all(handles).await;
    }

    #[tracing::instrument(level = "debug")]
    pub async fn send_response(tracker: Arc<FileTracker>, socket: Arc<UdpSocket>, remote_addr: SocketAddr, response: PeersResponse)
    {
        let payload = match response.to_bytes() {
            Ok(payload) => payload,
            Err(error) => {
                sentry::capture_error(&error);
                tracker.update_stats(StatsEvent::SendFailures, 1);
                warn!("[UDP] Could not encode response for {remote_addr}: {error}");
                return;
            }
        };

        match socket.send_to(&payload, remote_addr).await {
            Ok(_) => {
                tracker.update_stats(StatsEvent::ResponsesSent, 1);
            }
            Err(error) => {
                sentry::capture_error(&error);
                tracker.update_stats(StatsEvent::SendFailures, 1);
                warn!("[UDP] Could not send response to {remote_addr}: {error}");
            }
        }
    }
}
