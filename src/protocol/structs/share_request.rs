use crate::protocol::structs::peer_address::PeerAddress;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ShareRequest {
    pub file_name: String,
    pub peer: PeerAddress,
}
