//! Core tracker logic.
//!
//! The tracker keeps three pieces of state for its whole lifetime:
//!
//! - **File registry**: file name to the deduplicated set of peers offering it.
//!   A file name only exists while at least one peer offers it.
//! - **Last-seen table**: peer address to the instant of its latest `share` or
//!   `keep_alive`.
//! - **Request log**: append-only audit trail of every `share`, `get` and
//!   rejected datagram.
//!
//! The registry and the last-seen table live behind one `RwLock` so a `share`
//! updates both atomically and the sweeper never observes one without the
//! other. The request log has its own lock.
//!
//! # Liveness
//!
//! A background sweep runs every `peers_cleanup_interval` seconds and evicts
//! every peer whose last-seen instant is more than `peers_timeout` seconds old.
//! Candidates are collected under a read lock and re-checked under the write
//! lock, so a peer refreshed between both passes survives.
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::tracker::structs::file_tracker::FileTracker;
//!
//! let tracker = Arc::new(FileTracker::new(config));
//! tracker.add_peer("movie.mp4", PeerAddress::new("127.0.0.1", 9001), Instant::now());
//! let peers = tracker.get_peers("movie.mp4");
//! ```

/// Tracker enumerations (errors).
pub mod enums;

/// Implementation blocks for the registry, handlers, sweeper and reports.
pub mod impls;

/// Tracker data structures.
pub mod structs;

/// Unit tests for the tracker core.
pub mod tests;
