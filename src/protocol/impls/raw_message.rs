use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::structs::raw_message::RawMessage;

impl RawMessage {
    /// Reads each known field on its own.
    ///
    /// A field of the wrong type is left empty and reported as the second
    /// element, so the fields that did parse survive for auditing.
    pub fn from_object(object: &Map<String, Value>) -> (RawMessage, Vec<(&'static str, ProtocolError)>)
    {
        let mut field_errors = Vec::new();
        let raw = RawMessage {
            action: read_field(object, "action", &mut field_errors),
            file_name: read_field(object, "file_name", &mut field_errors),
            peer: read_field(object, "peer", &mut field_errors),
            request_id: read_field(object, "request_id", &mut field_errors),
        };
        (raw, field_errors)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError>
    {
        serde_json::to_vec(self).map_err(|error| ProtocolError::Encode(error.to_string()))
    }
}

fn read_field<T: DeserializeOwned>(object: &Map<String, Value>, field: &'static str, field_errors: &mut Vec<(&'static str, ProtocolError)>) -> Option<T>
{
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => match T::deserialize(value) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                field_errors.push((field, ProtocolError::InvalidField {
                    field: field.to_string(),
                    reason: error.to_string(),
                }));
                None
            }
        }
    }
}
