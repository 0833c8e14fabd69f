//! Tracker data structures.

/// Main tracker handle shared by every service.
pub mod file_tracker;

/// File name to providers map.
pub mod peer_registry;

/// Registry plus last-seen table, guarded together.
pub mod tracker_state;

/// One audited request.
pub mod request_record;

/// Result of one sweep pass.
pub mod sweep_stats;
