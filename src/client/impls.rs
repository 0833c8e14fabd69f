//! Client implementation blocks.

pub mod tracker_client;
