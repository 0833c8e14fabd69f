use serde::{Deserialize, Serialize};

/// Address of a peer's file server, `[host, port]` on the wire.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
#[serde(from = "(String, u16)", into = "(String, u16)")]
pub struct PeerAddress {
    pub host: String,
    pub port: u16,
}
