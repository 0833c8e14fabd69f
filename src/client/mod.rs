//! Request correlator used by peers to talk to the tracker.
//!
//! Every call binds a fresh ephemeral UDP socket, sends one datagram and,
//! for a `get`, waits on that socket for the reply. The socket is released on
//! every exit path when it goes out of scope.
//!
//! A datagram only resolves the pending reply when it comes from the tracker
//! address and, if the request carried a `request_id`, echoes that id. Anything
//! else is discarded and the wait continues until the deadline.
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::client::structs::tracker_client::TrackerClient;
//!
//! let client = TrackerClient::new(tracker_address, Duration::from_secs(5))
//!     .with_shutdown(shutdown_rx);
//! client.share("movie.mp4", PeerAddress::new("127.0.0.1", 9001)).await?;
//! let providers = client.get_peers("movie.mp4").await?;
//! ```

/// Client enumerations (errors).
pub mod enums;

/// Client data structures.
pub mod structs;

/// Implementation blocks for the correlator.
pub mod impls;
