use serde::Serialize;
use crate::protocol::structs::peer_address::PeerAddress;

/// Audit entry, never mutated after it is appended.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    pub timestamp: i64,
    pub requester: PeerAddress,
    pub file_name: Option<String>,
    pub action: Option<String>,
    pub success: bool,
    /// Providers of `file_name` when the request was handled.
    pub peers_for_file: Vec<PeerAddress>,
}
