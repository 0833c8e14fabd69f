use std::collections::BTreeMap;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::file_tracker::FileTracker;

impl FileTracker {
    /// Every file name with its current providers.
    pub fn dump(&self) -> BTreeMap<String, Vec<PeerAddress>>
    {
        let lock = self.state.read();
        lock.registry.files()
    }

    /// Unlike the protocol `get`, an unknown file is an error here.
    pub fn get_file_report(&self, file_name: &str) -> Result<Vec<PeerAddress>, TrackerError>
    {
        let lock = self.state.read();
        if !lock.registry.contains_file(file_name) {
            return Err(TrackerError::UnknownFile(file_name.to_string()));
        }
        Ok(lock.registry.lookup(file_name))
    }
}
