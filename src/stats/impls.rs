//! Statistics implementation blocks.

/// `FileTracker` statistics accessors.
pub mod file_tracker;
