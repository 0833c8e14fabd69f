//! Tracker implementation blocks.

pub mod file_tracker;
pub mod file_tracker_handlers;
pub mod file_tracker_peers;
pub mod file_tracker_reports;
pub mod file_tracker_requests;
pub mod file_tracker_sweeper;
pub mod peer_registry;
pub mod request_record;
pub mod tracker_state;
