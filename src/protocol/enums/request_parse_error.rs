use thiserror::Error;
use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::structs::peer_address::PeerAddress;

/// A rejected datagram.
///
/// `Readable` keeps the fields that could still be read from a JSON object so
/// the rejection can be audited against a requester and file name.
/// `Unreadable` is used when the payload was not a JSON object at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestParseError {
    #[error("{err}")]
    Readable {
        action: Option<String>,
        file_name: Option<String>,
        peer: Option<PeerAddress>,
        err: ProtocolError,
    },
    #[error("{err}")]
    Unreadable {
        err: ProtocolError,
    },
}
