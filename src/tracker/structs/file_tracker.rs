use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::request_record::RequestRecord;
use crate::tracker::structs::tracker_state::TrackerState;

#[derive(Debug)]
pub struct FileTracker {
    pub config: Arc<Configuration>,
    pub state: Arc<RwLock<TrackerState>>,
    pub requests: Arc<RwLock<Vec<RequestRecord>>>,
    pub stats: Arc<StatsAtomics>,
}
