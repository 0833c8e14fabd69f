use std::time::Duration;
use thiserror::Error;
use crate::protocol::enums::protocol_error::ProtocolError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no response from tracker within {timeout:?}")]
    NoResponse { timeout: Duration },
    #[error("request cancelled by shutdown")]
    Cancelled,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}
