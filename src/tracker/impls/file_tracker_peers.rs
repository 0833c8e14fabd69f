use log::debug;
use tokio::time::Instant;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::tracker::structs::file_tracker::FileTracker;

impl FileTracker {
    /// Registers `peer` for `file_name`, stamps it as seen and returns the
    /// providers of the file, all inside one write section.
    pub fn add_peer(&self, file_name: &str, peer: PeerAddress, now: Instant) -> Vec<PeerAddress>
    {
        let mut lock = self.state.write();
        lock.share(file_name, peer, now)
    }

    pub fn get_peers(&self, file_name: &str) -> Vec<PeerAddress>
    {
        let lock = self.state.read();
        lock.registry.lookup(file_name)
    }

    /// Refreshes the last-seen table only, the registry is left untouched.
    pub fn keep_alive(&self, peer: PeerAddress, now: Instant)
    {
        debug!("[PEERS] Keep-alive from {peer}");
        let mut lock = self.state.write();
        lock.touch(peer, now);
    }

    pub fn last_seen(&self, peer: &PeerAddress) -> Option<Instant>
    {
        let lock = self.state.read();
        lock.last_seen.get(peer).copied()
    }
}
