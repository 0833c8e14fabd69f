use std::collections::{BTreeMap, BTreeSet};
use crate::protocol::structs::peer_address::PeerAddress;

/// File name to the peers offering it. Never holds an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerRegistry {
    pub(crate) files: BTreeMap<String, BTreeSet<PeerAddress>>,
}
