use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PeerConfig {
    pub tracker_address: String,
    pub listen_address: String,
    /// Seconds to wait for a tracker reply.
    pub request_timeout: u64,
    /// Seconds between two keep-alive datagrams.
    pub keep_alive_interval: u64,
    /// Read `uploads` and `quit` from stdin while seeding.
    pub interactive_console: bool,
}
