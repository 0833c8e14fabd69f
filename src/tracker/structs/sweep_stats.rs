use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub peers_evicted: u64,
    pub files_removed: u64,
}
