use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::file_tracker::FileTracker;

impl FileTracker {
    pub fn get_stats(&self) -> Stats
    {
        let (files, peers, tracked_peers) = {
            let lock = self.state.read();
            (lock.registry.file_count() as i64, lock.registry.peer_count() as i64, lock.last_seen.len() as i64)
        };

        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_sweep: self.stats.timestamp_run_sweep.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            files,
            peers,
            tracked_peers,
            shares_handled: self.stats.shares_handled.load(Ordering::SeqCst),
            gets_handled: self.stats.gets_handled.load(Ordering::SeqCst),
            keep_alives_handled: self.stats.keep_alives_handled.load(Ordering::SeqCst),
            invalid_requests: self.stats.invalid_requests.load(Ordering::SeqCst),
            responses_sent: self.stats.responses_sent.load(Ordering::SeqCst),
            send_failures: self.stats.send_failures.load(Ordering::SeqCst),
            peers_evicted: self.stats.peers_evicted.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats_counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::TimestampSweep => &self.stats.timestamp_run_sweep,
            StatsEvent::TimestampConsole => &self.stats.timestamp_run_console,
            StatsEvent::SharesHandled => &self.stats.shares_handled,
            StatsEvent::GetsHandled => &self.stats.gets_handled,
            StatsEvent::KeepAlivesHandled => &self.stats.keep_alives_handled,
            StatsEvent::InvalidRequests => &self.stats.invalid_requests,
            StatsEvent::ResponsesSent => &self.stats.responses_sent,
            StatsEvent::SendFailures => &self.stats.send_failures,
            StatsEvent::PeersEvicted => &self.stats.peers_evicted,
        }
    }
}
