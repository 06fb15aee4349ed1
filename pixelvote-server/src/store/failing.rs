use crate::chat::model::{AuthorName, ChatMessage, MessageText, RoomId};
use crate::chat::store::MessageStore;
use crate::game::model::{Game, NewGame, Vote};
use crate::game::store::GameStore;
use crate::store::Store;
use crate::store::error::StoreError;
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Store whose backend is unreachable. Counts the attempted writes.
#[derive(Debug, Default)]
pub struct FailingStore {
	attempted_appends: AtomicUsize,
}

impl FailingStore {
	pub fn attempted_appends(&self) -> usize {
		self.attempted_appends.load(Ordering::SeqCst)
	}
}

fn unreachable() -> StoreError {
	StoreError::Connection(anyhow!("Store is unreachable"))
}

#[async_trait]
impl MessageStore for FailingStore {
	async fn append(
		&self,
		_room_id: &RoomId,
		_author: &AuthorName,
		_text: &MessageText,
	) -> Result<ChatMessage, StoreError> {
		self.attempted_appends.fetch_add(1, Ordering::SeqCst);
		Err(unreachable())
	}

	async fn recent(&self, _room_id: &RoomId, _limit: usize) -> Result<Vec<ChatMessage>, StoreError> {
		Err(unreachable())
	}
}

#[async_trait]
impl GameStore for FailingStore {
	async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
		Err(unreachable())
	}

	async fn create_game(&self, _game: &NewGame) -> Result<Game, StoreError> {
		Err(unreachable())
	}

	async fn vote_game(&self, _game_uuid: Uuid, _vote: Vote) -> Result<Game, StoreError> {
		Err(unreachable())
	}

	async fn remove_all_games(&self) -> Result<u64, StoreError> {
		Err(unreachable())
	}
}

impl Store for FailingStore {
	fn messages(&self) -> &dyn MessageStore {
		self
	}

	fn games(&self) -> &dyn GameStore {
		self
	}
}
