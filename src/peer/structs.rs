//! Peer data structures.

/// Seeder and leecher state.
pub mod peer_node;

/// One served upload.
pub mod upload_record;
