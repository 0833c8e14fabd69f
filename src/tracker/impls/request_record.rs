use crate::common::common::current_timestamp;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::tracker::structs::request_record::RequestRecord;

impl RequestRecord {
    pub fn succeeded(requester: PeerAddress, file_name: &str, action: &str, peers_for_file: Vec<PeerAddress>) -> RequestRecord
    {
        RequestRecord {
            timestamp: current_timestamp(),
            requester,
            file_name: Some(file_name.to_string()),
            action: Some(action.to_string()),
            success: true,
            peers_for_file,
        }
    }

    /// Rejected datagrams keep whatever could be read and an empty snapshot.
    pub fn failed(requester: PeerAddress, file_name: Option<&str>, action: Option<&str>) -> RequestRecord
    {
        RequestRecord {
            timestamp: current_timestamp(),
            requester,
            file_name: file_name.map(str::to_string),
            action: action.map(str::to_string),
            success: false,
            peers_for_file: Vec::new(),
        }
    }
}
