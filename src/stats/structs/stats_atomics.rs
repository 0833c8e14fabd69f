use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_sweep: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub shares_handled: AtomicI64,
    pub gets_handled: AtomicI64,
    pub keep_alives_handled: AtomicI64,
    pub invalid_requests: AtomicI64,
    pub responses_sent: AtomicI64,
    pub send_failures: AtomicI64,
    pub peers_evicted: AtomicI64,
}
