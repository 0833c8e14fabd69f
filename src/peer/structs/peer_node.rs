use std::sync::Arc;
use std::time::Duration;
use parking_lot::RwLock;
use crate::client::structs::tracker_client::TrackerClient;
use crate::peer::structs::upload_record::UploadRecord;

#[derive(Debug)]
pub struct PeerNode {
    pub client: Arc<TrackerClient>,
    pub listen_address: String,
    pub keep_alive_interval: Duration,
    pub uploads: Arc<RwLock<Vec<UploadRecord>>>,
}
