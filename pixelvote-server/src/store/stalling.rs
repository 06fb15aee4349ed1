use crate::chat::model::{AuthorName, ChatMessage, MessageText, RoomId};
use crate::chat::store::MessageStore;
use crate::game::model::{Game, NewGame, Vote};
use crate::game::store::GameStore;
use crate::store::Store;
use crate::store::error::StoreError;
use crate::store::memory::InMemoryStore;
use async_trait::async_trait;
use tokio::sync::Notify;
use uuid::Uuid;

/// In-memory store whose appends block until they are released.
#[derive(Default)]
pub struct StallingStore {
	inner: InMemoryStore,
	append_started: Notify,
	release: Notify,
}

impl StallingStore {
	pub async fn wait_for_append(&self) {
		self.append_started.notified().await;
	}

	pub fn release_append(&self) {
		self.release.notify_one();
	}
}

#[async_trait]
impl MessageStore for StallingStore {
	async fn append(
		&self,
		room_id: &RoomId,
		author: &AuthorName,
		text: &MessageText,
	) -> Result<ChatMessage, StoreError> {
		self.append_started.notify_one();
		self.release.notified().await;
		self.inner.append(room_id, author, text).await
	}

	async fn recent(&self, room_id: &RoomId, limit: usize) -> Result<Vec<ChatMessage>, StoreError> {
		self.inner.recent(room_id, limit).await
	}
}

#[async_trait]
impl GameStore for StallingStore {
	async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
		self.inner.list_games().await
	}

	async fn create_game(&self, game: &NewGame) -> Result<Game, StoreError> {
		self.inner.create_game(game).await
	}

	async fn vote_game(&self, game_uuid: Uuid, vote: Vote) -> Result<Game, StoreError> {
		self.inner.vote_game(game_uuid, vote).await
	}

	async fn remove_all_games(&self) -> Result<u64, StoreError> {
		self.inner.remove_all_games().await
	}
}

impl Store for StallingStore {
	fn messages(&self) -> &dyn MessageStore {
		self
	}

	fn games(&self) -> &dyn GameStore {
		self
	}
}
