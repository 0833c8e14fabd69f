//! UDP implementation blocks.

pub mod udp_server;
