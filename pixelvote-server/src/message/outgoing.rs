use crate::message::outgoing::broadcast_message::BroadcastMessage;
use crate::message::outgoing::error_message::ErrorMessage;
use crate::message::outgoing::success_message::SuccessMessage;
use crate::message::{
	MessageError, WebSocketMessage, deserialize_message_from_websocket_message, serialize_message_to_websocket_message,
};
use js_int::UInt;
use serde::{Deserialize, Serialize};

pub mod broadcast_message;
pub mod error_message;
pub mod success_message;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type")]
pub enum OutgoingMessage {
	Success {
		request_id: UInt,
		message: SuccessMessage,
	},
	Error {
		request_id: Option<UInt>,
		message: ErrorMessage,
	},
	Broadcast {
		message: BroadcastMessage,
	},
}

impl From<&OutgoingMessage> for WebSocketMessage {
	fn from(message: &OutgoingMessage) -> Self {
		serialize_message_to_websocket_message(message)
	}
}

impl TryFrom<&WebSocketMessage> for OutgoingMessage {
	type Error = MessageError;

	fn try_from(websocket_message: &WebSocketMessage) -> Result<Self, MessageError> {
		deserialize_message_from_websocket_message(websocket_message)
	}
}
