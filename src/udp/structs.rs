//! UDP data structures.

/// Bound socket plus the tracker it dispatches to.
pub mod udp_server;
