use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::enums::request_parse_error::RequestParseError;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::protocol::structs::raw_message::RawMessage;

impl RequestParseError {
    pub fn readable(raw: RawMessage, err: ProtocolError) -> Self {
        Self::Readable {
            action: raw.action,
            file_name: raw.file_name,
            peer: raw.peer,
            err,
        }
    }

    pub fn unreadable(err: ProtocolError) -> Self {
        Self::Unreadable {
            err,
        }
    }

    pub fn error(&self) -> &ProtocolError {
        match self {
            Self::Readable { err, .. } => err,
            Self::Unreadable { err } => err,
        }
    }

    pub fn action(&self) -> Option<&str> {
        match self {
            Self::Readable { action, .. } => action.as_deref(),
            Self::Unreadable { .. } => None,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Readable { file_name, .. } => file_name.as_deref(),
            Self::Unreadable { .. } => None,
        }
    }

    pub fn peer(&self) -> Option<&PeerAddress> {
        match self {
            Self::Readable { peer, .. } => peer.as_ref(),
            Self::Unreadable { .. } => None,
        }
    }
}
