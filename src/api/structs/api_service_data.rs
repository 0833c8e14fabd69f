use std::sync::Arc;
use crate::tracker::structs::file_tracker::FileTracker;

/// Application data injected into every API handler.
#[derive(Debug)]
pub struct ApiServiceData {
    pub tracker: Arc<FileTracker>,
}
