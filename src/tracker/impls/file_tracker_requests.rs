use crate::tracker::structs::file_tracker::FileTracker;
use crate::tracker::structs::request_record::RequestRecord;

impl FileTracker {
    pub fn log_request(&self, record: RequestRecord)
    {
        let mut lock = self.requests.write();
        lock.push(record);
    }

    pub fn get_requests(&self) -> Vec<RequestRecord>
    {
        let lock = self.requests.read();
        lock.clone()
    }

    pub fn request_count(&self) -> usize
    {
        let lock = self.requests.read();
        lock.len()
    }
}
