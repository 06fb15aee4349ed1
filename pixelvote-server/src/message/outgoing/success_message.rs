use crate::chat::model::{ChatMessage, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type")]
pub enum SuccessMessage {
	/// Sent to the joining client only, oldest message first.
	History {
		room_id: RoomId,
		messages: Vec<ChatMessageResponse>,
	},
	Sent {
		message_id: Uuid,
	},
	Success,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChatMessageResponse {
	pub id: Uuid,
	pub author: String,
	pub text: String,
	pub created_at: DateTime<Utc>,
}

impl From<ChatMessage> for ChatMessageResponse {
	fn from(message: ChatMessage) -> Self {
		Self {
			id: message.uuid,
			author: message.author.into(),
			text: message.text.into(),
			created_at: message.created_at,
		}
	}
}
