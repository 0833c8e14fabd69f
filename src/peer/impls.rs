//! Peer implementation blocks.

pub mod peer_console_command;
pub mod peer_node;
pub mod peer_node_fetch;
pub mod peer_node_seed;
