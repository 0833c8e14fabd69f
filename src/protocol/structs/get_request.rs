#[derive(PartialEq, Eq, Clone, Debug)]
pub struct GetRequest {
    pub file_name: String,
    /// Echoed back in the reply when set.
    pub request_id: Option<u64>,
}
