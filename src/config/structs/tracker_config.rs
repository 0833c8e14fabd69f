use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Seconds without a keep-alive or share before a peer is evicted.
    pub peers_timeout: u64,
    /// Seconds between two sweeps.
    pub peers_cleanup_interval: u64,
    pub interactive_console: bool,
}
