use crate::chat::error::ValidationError;
use crate::chat::model::{AuthorName, ChatMessage, MessageText, RoomId};
use crate::chat::store::MessageStore;
use crate::message::outgoing::broadcast_message::ChatBroadcast;
use crate::room::broadcast_channel::BroadcastChannel;
use crate::store::error::StoreError;
use thiserror::Error;
use tracing::debug;

pub mod error;
pub mod model;
pub mod store;

/// Number of messages a client receives as history when joining a room.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Error, Debug)]
pub enum ChatError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error("Failed to persist chat message: {0}")]
	Persistence(#[from] StoreError),
}

/// Validates, persists and then publishes a chat message to everyone in the room.
///
/// Nothing is written when validation fails and nothing is published when persisting fails.
pub async fn post_message(
	store: &dyn MessageStore,
	broadcast_channel: &BroadcastChannel,
	room_id: &RoomId,
	author: &AuthorName,
	text: Option<&str>,
) -> Result<ChatMessage, ChatError> {
	let text = MessageText::new(text.unwrap_or_default())?;
	let message = store.append(room_id, author, &text).await?;

	let delivered = broadcast_channel
		.publish(room_id, ChatBroadcast::from(message.clone()).into())
		.await;
	debug!(room_id = %room_id, message = %message.uuid, delivered, "Published chat message");

	Ok(message)
}
