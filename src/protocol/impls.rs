//! Codec implementation blocks.

pub mod action;
pub mod peer_address;
pub mod peers_response;
pub mod raw_message;
pub mod request;
pub mod request_parse_error;
