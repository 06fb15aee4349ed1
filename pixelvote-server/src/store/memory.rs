use crate::chat::model::{AuthorName, ChatMessage, MessageText, RoomId};
use crate::chat::store::MessageStore;
use crate::game::model::{Game, NewGame, Vote};
use crate::game::store::GameStore;
use crate::store::Store;
use crate::store::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

/// Keeps everything in process memory, used when no database is configured or reachable.
#[derive(Default)]
pub struct InMemoryStore {
	chat: Mutex<ChatState>,
	games: Mutex<Vec<Game>>,
}

#[derive(Default)]
struct ChatState {
	/// Per room in insertion order. Since `created_at` never decreases this is also sorted
	/// by `(created_at, insertion sequence)`.
	rooms: HashMap<RoomId, Vec<ChatMessage>>,
	latest_created_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl MessageStore for InMemoryStore {
	async fn append(&self, room_id: &RoomId, author: &AuthorName, text: &MessageText) -> Result<ChatMessage, StoreError> {
		let mut chat = self.chat.lock();

		let now = Utc::now();
		let created_at = chat.latest_created_at.map_or(now, |latest| latest.max(now));
		chat.latest_created_at = Some(created_at);

		let message = ChatMessage {
			uuid: Uuid::new_v4(),
			room_id: room_id.clone(),
			author: author.clone(),
			text: text.clone(),
			created_at,
		};
		chat.rooms.entry(room_id.clone()).or_default().push(message.clone());

		Ok(message)
	}

	async fn recent(&self, room_id: &RoomId, limit: usize) -> Result<Vec<ChatMessage>, StoreError> {
		let chat = self.chat.lock();
		let Some(messages) = chat.rooms.get(room_id) else {
			return Ok(Vec::new());
		};

		let mut recent = messages.iter().rev().take(limit).cloned().collect::<Vec<_>>();
		recent.reverse();
		Ok(recent)
	}
}

#[async_trait]
impl GameStore for InMemoryStore {
	async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
		let mut games = self.games.lock().clone();
		// stable, so equal votes stay in insertion order
		games.sort_by(|left, right| right.votes.cmp(&left.votes));
		Ok(games)
	}

	async fn create_game(&self, game: &NewGame) -> Result<Game, StoreError> {
		let game = Game {
			uuid: Uuid::new_v4(),
			title: game.title().to_owned(),
			description: game.description().to_owned(),
			game_url: game.game_url().to_owned(),
			image_url: game.image_url().to_owned(),
			x_profile: game.x_profile().to_owned(),
			votes: game.initial_votes(),
			created_at: Utc::now(),
		};
		self.games.lock().push(game.clone());
		Ok(game)
	}

	async fn vote_game(&self, game_uuid: Uuid, vote: Vote) -> Result<Game, StoreError> {
		let mut games = self.games.lock();
		let game = games
			.iter_mut()
			.find(|game| game.uuid == game_uuid)
			.ok_or(StoreError::NotFound)?;
		game.votes += vote.delta();
		Ok(game.clone())
	}

	async fn remove_all_games(&self) -> Result<u64, StoreError> {
		let mut games = self.games.lock();
		let removed = u64::try_from(games.len()).unwrap_or(u64::MAX);
		games.clear();
		Ok(removed)
	}
}

impl Store for InMemoryStore {
	fn messages(&self) -> &dyn MessageStore {
		self
	}

	fn games(&self) -> &dyn GameStore {
		self
	}
}
