use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::tracker::structs::file_tracker::FileTracker;

#[derive(Debug)]
pub struct UdpServer {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) tracker: Arc<FileTracker>,
    pub(crate) threads: u64,
}
