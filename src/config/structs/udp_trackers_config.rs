use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UdpTrackersConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub threads: u64,
    /// Zero keeps the OS default.
    pub receive_buffer_size: usize,
    /// Zero keeps the OS default.
    pub send_buffer_size: usize,
    pub reuse_address: bool,
}
