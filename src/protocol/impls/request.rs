use serde_json::Value;
use crate::protocol::enums::action::Action;
use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::enums::request::Request;
use crate::protocol::enums::request_parse_error::RequestParseError;
use crate::protocol::structs::get_request::GetRequest;
use crate::protocol::structs::keep_alive_request::KeepAliveRequest;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::protocol::structs::raw_message::RawMessage;
use crate::protocol::structs::share_request::ShareRequest;

impl From<ShareRequest> for Request {
    fn from(r: ShareRequest) -> Self {
        Self::Share(r)
    }
}

impl From<GetRequest> for Request {
    fn from(r: GetRequest) -> Self {
        Self::Get(r)
    }
}

impl From<KeepAliveRequest> for Request {
    fn from(r: KeepAliveRequest) -> Self {
        Self::KeepAlive(r)
    }
}

impl Request {
    pub fn action(&self) -> Action
    {
        match self {
            Request::Share(_) => Action::Share,
            Request::Get(_) => Action::Get,
            Request::KeepAlive(_) => Action::KeepAlive,
        }
    }

    pub fn file_name(&self) -> Option<&str>
    {
        match self {
            Request::Share(r) => Some(r.file_name.as_str()),
            Request::Get(r) => Some(r.file_name.as_str()),
            Request::KeepAlive(_) => None,
        }
    }

    /// Requests that expect a `peers` reply.
    pub fn expects_response(&self) -> bool
    {
        matches!(self, Request::Get(_))
    }

    #[tracing::instrument(level = "debug")]
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError>
    {
        let raw = match self {
            Request::Share(r) => RawMessage {
                action: Some(Action::Share.to_string()),
                file_name: Some(r.file_name.clone()),
                peer: Some(r.peer.clone()),
                request_id: None,
            },
            Request::Get(r) => RawMessage {
                action: Some(Action::Get.to_string()),
                file_name: Some(r.file_name.clone()),
                peer: None,
                request_id: r.request_id,
            },
            Request::KeepAlive(r) => RawMessage {
                action: Some(Action::KeepAlive.to_string()),
                file_name: None,
                peer: Some(r.peer.clone()),
                request_id: None,
            },
        };
        raw.to_bytes()
    }

    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Request, RequestParseError>
    {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|error| RequestParseError::unreadable(ProtocolError::InvalidPayload(error.to_string())))?;
        let object = match value.as_object() {
            Some(object) => object,
            None => return Err(RequestParseError::unreadable(ProtocolError::InvalidPayload(String::from("expected a JSON object")))),
        };

        // Only the fields the declared action reads can reject the request.
        let (raw, field_errors) = RawMessage::from_object(object);
        let fields = raw.action.as_deref().and_then(Action::from_name).map(|action| action.fields());
        let field_error = field_errors.into_iter().find(|(field, _)| match fields {
            Some(fields) => fields.contains(field),
            None => *field == "action",
        });
        if let Some((_, error)) = field_error {
            return Err(RequestParseError::readable(raw, error));
        }
        Request::try_from(raw)
    }
}

impl TryFrom<RawMessage> for Request {
    type Error = RequestParseError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        let action = match raw.action.as_deref() {
            None => return Err(RequestParseError::readable(raw, ProtocolError::MissingAction)),
            Some(name) => match Action::from_name(name) {
                Some(action) => action,
                None => {
                    let error = ProtocolError::UnknownAction(name.to_string());
                    return Err(RequestParseError::readable(raw, error));
                }
            }
        };

        match action {
            Action::Share => {
                let file_name = match required_file_name(&raw, action) {
                    Ok(file_name) => file_name,
                    Err(error) => return Err(RequestParseError::readable(raw, error)),
                };
                let peer = match required_peer(&raw, action) {
                    Ok(peer) => peer,
                    Err(error) => return Err(RequestParseError::readable(raw, error)),
                };
                Ok(Request::from(ShareRequest { file_name, peer }))
            }
            Action::Get => {
                let file_name = match required_file_name(&raw, action) {
                    Ok(file_name) => file_name,
                    Err(error) => return Err(RequestParseError::readable(raw, error)),
                };
                Ok(Request::from(GetRequest { file_name, request_id: raw.request_id }))
            }
            Action::KeepAlive => {
                let peer = match required_peer(&raw, action) {
                    Ok(peer) => peer,
                    Err(error) => return Err(RequestParseError::readable(raw, error)),
                };
                Ok(Request::from(KeepAliveRequest { peer }))
            }
        }
    }
}

fn required_file_name(raw: &RawMessage, action: Action) -> Result<String, ProtocolError>
{
    match raw.file_name.as_deref() {
        None => Err(ProtocolError::MissingField {
            action: action.to_string(),
            field: String::from("file_name"),
        }),
        Some("") => Err(ProtocolError::InvalidField {
            field: String::from("file_name"),
            reason: String::from("must not be empty"),
        }),
        Some(file_name) => Ok(file_name.to_string())
    }
}

fn required_peer(raw: &RawMessage, action: Action) -> Result<PeerAddress, ProtocolError>
{
    match &raw.peer {
        None => Err(ProtocolError::MissingField {
            action: action.to_string(),
            field: String::from("peer"),
        }),
        Some(peer) if peer.host.is_empty() => Err(ProtocolError::InvalidField {
            field: String::from("peer"),
            reason: String::from("host must not be empty"),
        }),
        Some(peer) => Ok(peer.clone())
    }
}
