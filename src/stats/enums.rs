//! Statistics enumerations.

/// Counters that can be updated.
pub mod stats_event;
