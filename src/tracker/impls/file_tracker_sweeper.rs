use std::time::Duration;
use chrono::Utc;
use log::info;
use tokio::sync::watch;
use tokio::time::Instant;
use crate::common::common::shutdown_waiting;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::file_tracker::FileTracker;
use crate::tracker::structs::sweep_stats::SweepStats;

impl FileTracker {
    /// Evicts every peer not seen for more than `timeout` at `now`.
    pub fn sweep_expired(&self, now: Instant, timeout: Duration) -> SweepStats
    {
        let expired = self.collect_expired(now, timeout);
        self.evict_expired(expired, now, timeout)
    }

    /// Read pass: peers that look expired at `now`.
    pub fn collect_expired(&self, now: Instant, timeout: Duration) -> Vec<PeerAddress>
    {
        let lock = self.state.read();
        lock.expired_peers(now, timeout)
    }

    /// Write pass: evicts the `candidates` that are still expired at `now`.
    pub fn evict_expired(&self, candidates: Vec<PeerAddress>, now: Instant, timeout: Duration) -> SweepStats
    {
        if candidates.is_empty() {
            return SweepStats::default();
        }

        let mut stats = SweepStats::default();
        {
            let mut lock = self.state.write();
            let files_before = lock.registry.file_count();
            for peer in candidates {
                // Re-check, a keep-alive may have landed between both passes.
                if !lock.is_expired(&peer, now, timeout) {
                    continue;
                }
                lock.evict(&peer);
                info!("[SWEEP] Peer {peer} timed out");
                stats.peers_evicted += 1;
            }
            stats.files_removed = files_before.saturating_sub(lock.registry.file_count()) as u64;
        }

        self.update_stats(StatsEvent::PeersEvicted, stats.peers_evicted as i64);
        stats
    }

    /// Sweeps every `peers_cleanup_interval` seconds until shutdown.
    pub async fn sweep_loop(&self, mut shutdown: watch::Receiver<bool>)
    {
        let interval = Duration::from_secs(self.config.tracker_config.peers_cleanup_interval);
        let timeout = Duration::from_secs(self.config.tracker_config.peers_timeout);

        loop {
            if shutdown_waiting(interval, &mut shutdown).await {
                info!("[BOOT] Shutting down thread for peers sweep...");
                return;
            }

            self.set_stats(StatsEvent::TimestampSweep, Utc::now().timestamp() + interval.as_secs() as i64);
            let stats = self.sweep_expired(Instant::now(), timeout);
            if stats.peers_evicted > 0 {
                info!("[SWEEP] Evicted {} peer(s), {} file(s) no longer offered", stats.peers_evicted, stats.files_removed);
            }
        }
    }
}
