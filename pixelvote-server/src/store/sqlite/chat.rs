use crate::chat::model::{AuthorName, ChatMessage, MessageText, RoomId};
use crate::chat::store::MessageStore;
use crate::store::error::StoreError;
use crate::store::sqlite::SqliteStore;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::query_as;
use uuid::Uuid;

#[async_trait]
impl MessageStore for SqliteStore {
	async fn append(&self, room_id: &RoomId, author: &AuthorName, text: &MessageText) -> Result<ChatMessage, StoreError> {
		query_as(
			r"INSERT INTO chat_message (uuid, room_id, author, text, created_at)
			VALUES (?1, ?2, ?3, ?4, ?5)
			RETURNING
				uuid,
				room_id,
				author,
				text,
				created_at",
		)
		.bind(Uuid::new_v4())
		.bind(room_id.as_str())
		.bind(author.as_str())
		.bind(text.as_str())
		.bind(Utc::now())
		.fetch_one(&self.pool)
		.await
		.map_err(Into::into)
	}

	async fn recent(&self, room_id: &RoomId, limit: usize) -> Result<Vec<ChatMessage>, StoreError> {
		let limit = i64::try_from(limit).unwrap_or(i64::MAX);
		let mut messages: Vec<ChatMessage> = query_as(
			r"SELECT
				uuid,
				room_id,
				author,
				text,
				created_at
			FROM chat_message
			WHERE room_id = ?1
			ORDER BY created_at DESC, sequence DESC
			LIMIT ?2",
		)
		.bind(room_id.as_str())
		.bind(limit)
		.fetch_all(&self.pool)
		.await?;

		messages.reverse();
		Ok(messages)
	}
}
