use std::collections::BTreeMap;
use tokio::time::Instant;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::tracker::structs::peer_registry::PeerRegistry;

#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    pub registry: PeerRegistry,
    pub last_seen: BTreeMap<PeerAddress, Instant>,
}
