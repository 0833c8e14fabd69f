use thiserror::Error;

/// Reasons a datagram is not a well-formed rendezvous message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("missing action")]
    MissingAction,
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("missing field '{field}' for action '{action}'")]
    MissingField { action: String, field: String },
    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
    #[error("encode error: {0}")]
    Encode(String),
}
