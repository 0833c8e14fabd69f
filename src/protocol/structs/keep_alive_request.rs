use crate::protocol::structs::peer_address::PeerAddress;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct KeepAliveRequest {
    pub peer: PeerAddress,
}
