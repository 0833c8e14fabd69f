use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use parking_lot::RwLock;
use tokio::sync::watch;
use crate::client::structs::tracker_client::TrackerClient;
use crate::config::structs::peer_config::PeerConfig;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::peer_node::PeerNode;
use crate::peer::structs::upload_record::UploadRecord;
use crate::protocol::structs::peer_address::PeerAddress;

impl PeerNode {
    pub fn new(client: TrackerClient, listen_address: &str, keep_alive_interval: Duration) -> PeerNode
    {
        PeerNode {
            client: Arc::new(client),
            listen_address: listen_address.to_string(),
            keep_alive_interval,
            uploads: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn from_config(config: &PeerConfig, shutdown: watch::Receiver<bool>) -> Result<PeerNode, PeerError>
    {
        let tracker_address: SocketAddr = config.tracker_address.parse()
            .map_err(|_| PeerError::InvalidAddress(config.tracker_address.clone()))?;
        let client = TrackerClient::new(tracker_address, Duration::from_secs(config.request_timeout))
            .with_shutdown(shutdown);
        Ok(PeerNode::new(client, &config.listen_address, Duration::from_secs(config.keep_alive_interval)))
    }

    /// Host from `listen_address` with the port the listener actually got.
    ///
    /// A wildcard host such as `0.0.0.0` cannot be dialled by other peers and is rejected.
    pub fn advertised_address(&self, bound_port: u16) -> Result<PeerAddress, PeerError>
    {
        let (host, _) = self.listen_address.rsplit_once(':')
            .ok_or_else(|| PeerError::InvalidAddress(self.listen_address.clone()))?;
        let host = host.trim_start_matches('[').trim_end_matches(']');
        if host.is_empty() || host.parse::<IpAddr>().is_ok_and(|ip| ip.is_unspecified()) {
            return Err(PeerError::InvalidAddress(self.listen_address.clone()));
        }
        Ok(PeerAddress::new(host, bound_port))
    }

    pub fn get_uploads(&self) -> Vec<UploadRecord>
    {
        let lock = self.uploads.read();
        lock.clone()
    }
}
