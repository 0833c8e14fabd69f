use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use chrono::Utc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::file_tracker::FileTracker;
use crate::tracker::structs::tracker_state::TrackerState;

impl FileTracker {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> FileTracker
    {
        FileTracker {
            config,
            state: Arc::new(RwLock::new(TrackerState::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
            stats: Arc::new(StatsAtomics {
                started: AtomicI64::new(Utc::now().timestamp()),
                timestamp_run_sweep: AtomicI64::new(0),
                timestamp_run_console: AtomicI64::new(0),
                shares_handled: AtomicI64::new(0),
                gets_handled: AtomicI64::new(0),
                keep_alives_handled: AtomicI64::new(0),
                invalid_requests: AtomicI64::new(0),
                responses_sent: AtomicI64::new(0),
                send_failures: AtomicI64::new(0),
                peers_evicted: AtomicI64::new(0),
            }),
        }
    }
}
