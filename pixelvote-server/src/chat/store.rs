use crate::chat::model::{AuthorName, ChatMessage, MessageText, RoomId};
use crate::store::error::StoreError;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;


/// Append-only storage of chat messages, keyed by room.
#[async_trait]
pub trait MessageStore: Send + Sync + 'static {
	/// Persists a message, assigning its identity and creation time.
	async fn append(
		&self,
		room_id: &RoomId,
		author: &AuthorName,
		text: &MessageText,
	) -> Result<ChatMessage, StoreError>;

	/// The most recent `limit` messages of a room, oldest first.
	///
	/// Messages with equal creation time are returned in insertion order.
	async fn recent(&self, room_id: &RoomId, limit: usize) -> Result<Vec<ChatMessage>, StoreError>;
}

assert_obj_safe!(MessageStore);
