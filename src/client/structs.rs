//! Client data structures.

/// Handle to one tracker.
pub mod tracker_client;
