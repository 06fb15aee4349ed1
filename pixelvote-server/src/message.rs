use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub mod client_request;
pub mod outgoing;

pub type WebSocketMessage = tokio_tungstenite::tungstenite::Message;

#[derive(Error, Debug)]
pub enum MessageError {
	#[error("Failed to deserialize message: {error}, message was: {json}")]
	DeserializationFailed { error: String, json: String },
	#[error("Message has incorrect type: {0}")]
	WrongMessageType(DebugMessage),
}

/// Shows the frame type of a websocket message without its full payload.
#[derive(Debug)]
pub struct DebugMessage(pub WebSocketMessage);

impl Display for DebugMessage {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		let frame_type = match &self.0 {
			WebSocketMessage::Text(_) => "text",
			WebSocketMessage::Binary(_) => "binary",
			WebSocketMessage::Ping(_) => "ping",
			WebSocketMessage::Pong(_) => "pong",
			WebSocketMessage::Close(_) => "close",
			WebSocketMessage::Frame(_) => "frame",
		};
		write!(formatter, "{frame_type} frame")
	}
}

pub(crate) fn serialize_message_to_websocket_message(message: &impl Serialize) -> WebSocketMessage {
	let json = serde_json::to_string(message).expect("Failed to serialize message to JSON.");
	WebSocketMessage::text(json)
}

pub(crate) fn deserialize_message_from_websocket_message<Message: DeserializeOwned>(
	websocket_message: &WebSocketMessage,
) -> Result<Message, MessageError> {
	match websocket_message {
		WebSocketMessage::Text(json) => {
			serde_json::from_str(json.as_str()).map_err(|error| MessageError::DeserializationFailed {
				error: error.to_string(),
				json: json.as_str().to_owned(),
			})
		}
		_ => Err(MessageError::WrongMessageType(DebugMessage(websocket_message.clone()))),
	}
}
