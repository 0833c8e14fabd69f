use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_sweep: i64,
    pub timestamp_run_console: i64,
    pub files: i64,
    pub peers: i64,
    pub tracked_peers: i64,
    pub shares_handled: i64,
    pub gets_handled: i64,
    pub keep_alives_handled: i64,
    pub invalid_requests: i64,
    pub responses_sent: i64,
    pub send_failures: i64,
    pub peers_evicted: i64,
}
