use std::collections::{BTreeMap, BTreeSet};
use crate::protocol::structs::peer_address::PeerAddress;
use crate::tracker::structs::peer_registry::PeerRegistry;

impl PeerRegistry {
    pub fn new() -> PeerRegistry
    {
        PeerRegistry {
            files: BTreeMap::new(),
        }
    }

    /// Returns `true` when the peer was not yet registered for the file.
    pub fn add_peer(&mut self, file_name: &str, peer: PeerAddress) -> bool
    {
        match self.files.get_mut(file_name) {
            Some(peers) => peers.insert(peer),
            None => {
                self.files.insert(file_name.to_string(), BTreeSet::from([peer]));
                true
            }
        }
    }

    /// Removes the peer from every file and drops files left without providers.
    ///
    /// Returns the number of files the peer was removed from.
    pub fn remove_peer(&mut self, peer: &PeerAddress) -> usize
    {
        let mut removed = 0;
        self.files.retain(|_, peers| {
            if peers.remove(peer) {
                removed += 1;
            }
            !peers.is_empty()
        });
        removed
    }

    /// Unknown files yield an empty list.
    pub fn lookup(&self, file_name: &str) -> Vec<PeerAddress>
    {
        self.files.get(file_name).map(|peers| peers.iter().cloned().collect()).unwrap_or_default()
    }

    pub fn contains_file(&self, file_name: &str) -> bool
    {
        self.files.contains_key(file_name)
    }

    pub fn files(&self) -> BTreeMap<String, Vec<PeerAddress>>
    {
        self.files.iter().map(|(file_name, peers)| (file_name.clone(), peers.iter().cloned().collect())).collect()
    }

    pub fn file_count(&self) -> usize
    {
        self.files.len()
    }

    /// Distinct peers over all files.
    pub fn peer_count(&self) -> usize
    {
        self.files.values().flatten().collect::<BTreeSet<_>>().len()
    }
}
