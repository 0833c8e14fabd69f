use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Configuration file not found or corrupt: {0}")]
    NotCreated(String),
    #[error("Configuration file created at {0}, please review it and restart")]
    Created(String),
}
