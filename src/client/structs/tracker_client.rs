use std::net::SocketAddr;
use std::sync::atomic::AtomicU64;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Debug)]
pub struct TrackerClient {
    pub tracker_address: SocketAddr,
    /// Deadline applied by `get_peers`.
    pub request_timeout: Duration,
    pub(crate) request_id: AtomicU64,
    pub(crate) shutdown: Option<watch::Receiver<bool>>,
}
