use thiserror::Error;
use crate::client::enums::client_error::ClientError;

#[derive(Debug, Error)]
pub enum PeerError {
    #[error("tracker error: {0}")]
    Client(#[from] ClientError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("no peers found for {0}")]
    NoProviders(String),
    #[error("every provider of {0} failed")]
    AllProvidersFailed(String),
}
