use crate::protocol::structs::get_request::GetRequest;
use crate::protocol::structs::keep_alive_request::KeepAliveRequest;
use crate::protocol::structs::share_request::ShareRequest;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Request {
    Share(ShareRequest),
    Get(GetRequest),
    KeepAlive(KeepAliveRequest),
}
