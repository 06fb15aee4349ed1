use crate::chat::model::{ChatMessage, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type")]
pub enum BroadcastMessage {
	Chat(ChatBroadcast),
}

macro_rules! broadcast_from_struct {
	($enum_case: ident, $struct_type: ty) => {
		impl From<$struct_type> for BroadcastMessage {
			fn from(message: $struct_type) -> BroadcastMessage {
				BroadcastMessage::$enum_case(message)
			}
		}
	};
}

/// A new chat message in a room.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChatBroadcast {
	pub id: Uuid,
	pub room_id: RoomId,
	pub author: String,
	pub text: String,
	pub created_at: DateTime<Utc>,
}

broadcast_from_struct!(Chat, ChatBroadcast);

impl From<ChatMessage> for ChatBroadcast {
	fn from(message: ChatMessage) -> Self {
		Self {
			id: message.uuid,
			room_id: message.room_id,
			author: message.author.into(),
			text: message.text.into(),
			created_at: message.created_at,
		}
	}
}
