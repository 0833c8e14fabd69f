//! Peer enumerations.

/// Failures of seeding or fetching.
pub mod peer_error;

/// Commands of the peer console.
pub mod peer_console_command;
