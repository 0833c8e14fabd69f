use std::net::SocketAddr;
use log::{debug, info};
use tokio::time::Instant;
use crate::protocol::enums::action::Action;
use crate::protocol::enums::request::Request;
use crate::protocol::enums::request_parse_error::RequestParseError;
use crate::protocol::structs::get_request::GetRequest;
use crate::protocol::structs::keep_alive_request::KeepAliveRequest;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::protocol::structs::peers_response::PeersResponse;
use crate::protocol::structs::share_request::ShareRequest;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::file_tracker::FileTracker;
use crate::tracker::structs::request_record::RequestRecord;

impl FileTracker {
    /// Handles one datagram and returns the reply to send back, if any.
    ///
    /// Only a valid `get` produces a reply. Rejected datagrams are logged as a
    /// failed request and never stop the caller.
    #[tracing::instrument(skip(payload), level = "debug")]
    pub fn handle_packet(&self, remote_addr: SocketAddr, payload: &[u8]) -> Option<PeersResponse>
    {
        self.handle_packet_at(remote_addr, payload, Instant::now())
    }

    pub fn handle_packet_at(&self, remote_addr: SocketAddr, payload: &[u8], now: Instant) -> Option<PeersResponse>
    {
        match Request::from_bytes(payload) {
            Ok(request) => self.handle_request(request, remote_addr, now),
            Err(error) => {
                self.handle_invalid(remote_addr, error);
                None
            }
        }
    }

    pub fn handle_request(&self, request: Request, remote_addr: SocketAddr, now: Instant) -> Option<PeersResponse>
    {
        match request {
            Request::Share(share_request) => {
                self.handle_share(share_request, now);
                None
            }
            Request::Get(get_request) => {
                Some(self.handle_get(get_request, remote_addr))
            }
            Request::KeepAlive(keep_alive_request) => {
                self.handle_keep_alive(keep_alive_request, now);
                None
            }
        }
    }

    fn handle_share(&self, request: ShareRequest, now: Instant)
    {
        let peers_for_file = self.add_peer(&request.file_name, request.peer.clone(), now);
        info!("[UDP] Registered {} from {}", request.file_name, request.peer);
        self.log_request(RequestRecord::succeeded(request.peer, &request.file_name, Action::Share.as_str(), peers_for_file));
        self.update_stats(StatsEvent::SharesHandled, 1);
    }

    fn handle_get(&self, request: GetRequest, remote_addr: SocketAddr) -> PeersResponse
    {
        let peers = self.get_peers(&request.file_name);
        info!("[UDP] Sending {} provider(s) of {} to {remote_addr}", peers.len(), request.file_name);
        self.log_request(RequestRecord::succeeded(PeerAddress::from(remote_addr), &request.file_name, Action::Get.as_str(), peers.clone()));
        self.update_stats(StatsEvent::GetsHandled, 1);
        PeersResponse {
            peers,
            request_id: request.request_id,
        }
    }

    fn handle_keep_alive(&self, request: KeepAliveRequest, now: Instant)
    {
        self.keep_alive(request.peer, now);
        self.update_stats(StatsEvent::KeepAlivesHandled, 1);
    }

    fn handle_invalid(&self, remote_addr: SocketAddr, error: RequestParseError)
    {
        debug!("[UDP] Rejected datagram from {remote_addr}: {error}");
        let requester = error.peer().cloned().unwrap_or_else(|| PeerAddress::from(remote_addr));
        self.log_request(RequestRecord::failed(requester, error.file_name(), error.action()));
        self.update_stats(StatsEvent::InvalidRequests, 1);
    }
}
