use serde::{Deserialize, Serialize};
use crate::protocol::structs::peer_address::PeerAddress;

/// Reply to a `get`: every provider currently registered for the file.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct PeersResponse {
    pub peers: Vec<PeerAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
}
