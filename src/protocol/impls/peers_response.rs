use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::structs::peers_response::PeersResponse;

impl PeersResponse {
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError>
    {
        serde_json::to_vec(self).map_err(|error| ProtocolError::Encode(error.to_string()))
    }

    /// A reply without a `peers` list is rejected rather than read as empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<PeersResponse, ProtocolError>
    {
        serde_json::from_slice(bytes).map_err(|error| ProtocolError::InvalidPayload(error.to_string()))
    }
}
