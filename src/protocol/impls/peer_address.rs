use std::fmt;
use std::net::SocketAddr;
use crate::protocol::structs::peer_address::PeerAddress;

impl PeerAddress {
    pub fn new(host: impl Into<String>, port: u16) -> PeerAddress
    {
        PeerAddress {
            host: host.into(),
            port,
        }
    }
}

impl From<(String, u16)> for PeerAddress {
    fn from((host, port): (String, u16)) -> Self {
        PeerAddress { host, port }
    }
}

impl From<PeerAddress> for (String, u16) {
    fn from(address: PeerAddress) -> Self {
        (address.host, address.port)
    }
}

impl From<SocketAddr> for PeerAddress {
    fn from(address: SocketAddr) -> Self {
        PeerAddress {
            host: address.ip().to_string(),
            port: address.port(),
        }
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
