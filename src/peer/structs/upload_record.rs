use serde::Serialize;
use crate::protocol::structs::peer_address::PeerAddress;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub timestamp: i64,
    pub peer: PeerAddress,
    pub file_name: String,
}
