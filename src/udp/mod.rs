//! UDP dispatch service for the rendezvous protocol.
//!
//! One socket is bound per configured `[[udp_server]]` and shared by
//! `threads` receive tasks. Each datagram is decoded and handed to the
//! tracker; a `get` is answered on the same socket, every other message is
//! silent.
//!
//! # Behaviour
//!
//! - Malformed datagrams are logged as failed requests and never stop the loop
//! - Send failures are counted and reported to Sentry
//! - The receive tasks stop when the shutdown `watch` channel flips to `true`
//!
//! # Socket Options
//!
//! Buffer sizes and `SO_REUSEADDR` are applied through `socket2` before the
//! socket is handed to Tokio.

/// Implementation blocks for the UDP server.
pub mod impls;

/// Data structures for the UDP server.
pub mod structs;

/// Core UDP service implementation.
#[allow(clippy::module_inception)]
pub mod udp;
