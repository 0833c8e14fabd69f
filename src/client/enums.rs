//! Client enumerations.

/// Failures of a tracker exchange.
pub mod client_error;
