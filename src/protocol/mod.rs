//! Rendezvous protocol codec.
//!
//! Peers and the tracker exchange one UTF-8 JSON object per UDP datagram.
//!
//! # Message Types
//!
//! ```text
//! share:      {"action":"share","file_name":<string>,"peer":[<host>,<port>]}
//! get:        {"action":"get","file_name":<string>}            (optional "request_id":<u64>)
//! get-reply:  {"peers":[[<host>,<port>], ...]}                  ("request_id" echoed when present)
//! keep_alive: {"action":"keep_alive","peer":[<host>,<port>]}
//! ```
//!
//! `share` and `keep_alive` never get a reply. Unknown fields are ignored,
//! missing required fields are never defaulted.
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::protocol::enums::request::Request;
//!
//! let request = Request::from_bytes(br#"{"action":"get","file_name":"movie.mp4"}"#)?;
//! let bytes = request.to_bytes()?;
//! ```

/// Protocol enumerations (requests, actions, errors).
pub mod enums;

/// Protocol message structures.
pub mod structs;

/// Encoding and decoding implementations.
pub mod impls;
