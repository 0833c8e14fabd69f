//! Protocol message structures.

/// `[host, port]` address of a peer's file server.
pub mod peer_address;

/// Loosely typed wire object shared by every request.
pub mod raw_message;

/// `share` request body.
pub mod share_request;

/// `get` request body.
pub mod get_request;

/// `keep_alive` request body.
pub mod keep_alive_request;

/// Reply to a `get`.
pub mod peers_response;
