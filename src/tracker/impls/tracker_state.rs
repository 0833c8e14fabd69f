use std::time::Duration;
use tokio::time::Instant;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::tracker::structs::peer_registry::PeerRegistry;
use crate::tracker::structs::tracker_state::TrackerState;

impl TrackerState {
    pub fn new() -> TrackerState
    {
        TrackerState {
            registry: PeerRegistry::new(),
            last_seen: Default::default(),
        }
    }

    /// Registers the peer, stamps it and returns the providers of the file.
    pub fn share(&mut self, file_name: &str, peer: PeerAddress, now: Instant) -> Vec<PeerAddress>
    {
        self.touch(peer.clone(), now);
        self.registry.add_peer(file_name, peer);
        self.registry.lookup(file_name)
    }

    pub fn touch(&mut self, peer: PeerAddress, now: Instant)
    {
        self.last_seen.insert(peer, now);
    }

    pub fn is_expired(&self, peer: &PeerAddress, now: Instant, timeout: Duration) -> bool
    {
        match self.last_seen.get(peer) {
            None => false,
            Some(last_seen) => now.saturating_duration_since(*last_seen) > timeout
        }
    }

    pub fn expired_peers(&self, now: Instant, timeout: Duration) -> Vec<PeerAddress>
    {
        self.last_seen.iter()
            .filter(|(_, last_seen)| now.saturating_duration_since(**last_seen) > timeout)
            .map(|(peer, _)| peer.clone())
            .collect()
    }

    /// Removes the peer from the registry and the last-seen table.
    pub fn evict(&mut self, peer: &PeerAddress) -> usize
    {
        self.last_seen.remove(peer);
        self.registry.remove_peer(peer)
    }
}
