use crate::chat::error::ValidationError;
use crate::message::{
	MessageError, WebSocketMessage, deserialize_message_from_websocket_message, serialize_message_to_websocket_message,
};
use js_int::UInt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClientRequestWithId {
	pub request_id: UInt,
	#[serde(flatten)]
	pub request: ClientRequest,
}

/// Used to recover the request id of a request that couldn't be parsed otherwise.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RequestIdOnly {
	pub request_id: UInt,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ClientRequest {
	Join(JoinRequest),
	SetName(SetNameRequest),
	Send(SendRequest),
}

impl ClientRequest {
	pub fn kind(&self) -> &'static str {
		match self {
			ClientRequest::Join(_) => "join",
			ClientRequest::SetName(_) => "set_name",
			ClientRequest::Send(_) => "send",
		}
	}
}

macro_rules! client_request_from_struct {
	($enum_case: ident, $struct_type: ty) => {
		impl From<$struct_type> for ClientRequest {
			fn from(request: $struct_type) -> ClientRequest {
				ClientRequest::$enum_case(request)
			}
		}
	};
}

// Fields are kept as raw JSON so that missing values and values of the wrong type are rejected
// as invalid input of the request instead of as a malformed message.

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct JoinRequest {
	#[serde(default)]
	pub room_id: Option<Value>,
}

client_request_from_struct!(Join, JoinRequest);

impl JoinRequest {
	pub fn room_id(&self) -> Result<Option<&str>, ValidationError> {
		string_field(self.room_id.as_ref(), "room_id")
	}
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SetNameRequest {
	#[serde(default)]
	pub name: Option<Value>,
}

client_request_from_struct!(SetName, SetNameRequest);

impl SetNameRequest {
	pub fn name(&self) -> Result<Option<&str>, ValidationError> {
		string_field(self.name.as_ref(), "name")
	}
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SendRequest {
	#[serde(default)]
	pub room_id: Option<Value>,
	#[serde(default)]
	pub text: Option<Value>,
}

client_request_from_struct!(Send, SendRequest);

impl SendRequest {
	pub fn room_id(&self) -> Result<Option<&str>, ValidationError> {
		string_field(self.room_id.as_ref(), "room_id")
	}

	pub fn text(&self) -> Result<Option<&str>, ValidationError> {
		string_field(self.text.as_ref(), "text")
	}
}

/// `null` counts as missing.
pub(crate) fn string_field<'value>(
	value: Option<&'value Value>,
	field: &'static str,
) -> Result<Option<&'value str>, ValidationError> {
	match value {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(string)) => Ok(Some(string.as_str())),
		Some(_) => Err(ValidationError::NotAString(field)),
	}
}

impl From<&ClientRequestWithId> for WebSocketMessage {
	fn from(request: &ClientRequestWithId) -> Self {
		serialize_message_to_websocket_message(request)
	}
}

impl TryFrom<&WebSocketMessage> for ClientRequestWithId {
	type Error = MessageError;

	fn try_from(websocket_message: &WebSocketMessage) -> Result<Self, Self::Error> {
		deserialize_message_from_websocket_message(websocket_message)
	}
}

impl TryFrom<&WebSocketMessage> for RequestIdOnly {
	type Error = MessageError;

	fn try_from(websocket_message: &WebSocketMessage) -> Result<Self, Self::Error> {
		deserialize_message_from_websocket_message(websocket_message)
	}
}
