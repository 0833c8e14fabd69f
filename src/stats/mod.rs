//! Statistics tracking and monitoring module.
//!
//! Atomic counters track the tracker's activity without taking the registry
//! lock on the hot path. File and peer counts are read from the registry when
//! a snapshot is taken.
//!
//! # Statistics
//!
//! - Requests: shares, gets, keep-alives and rejected datagrams
//! - Replies: responses sent and send failures
//! - Liveness: peers evicted and the next sweep timestamp
//! - Registry: files offered, distinct providers, peers in the last-seen table
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::GetsHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;
