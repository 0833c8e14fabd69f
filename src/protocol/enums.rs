//! Protocol enumerations.

/// Known request actions.
pub mod action;

/// Decoded inbound request.
pub mod request;

/// Codec errors.
pub mod protocol_error;

/// Decode failure carrying whatever fields could still be read.
pub mod request_parse_error;
