use crate::game::model::{Game, NewGame, Vote};
use crate::store::error::StoreError;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;
use uuid::Uuid;


#[async_trait]
pub trait GameStore: Send + Sync + 'static {
	/// All games, most votes first. Games with equal votes are listed oldest first.
	async fn list_games(&self) -> Result<Vec<Game>, StoreError>;

	async fn create_game(&self, game: &NewGame) -> Result<Game, StoreError>;

	/// Returns [`StoreError::NotFound`] for unknown games.
	async fn vote_game(&self, game_uuid: Uuid, vote: Vote) -> Result<Game, StoreError>;

	/// Returns the number of removed games.
	async fn remove_all_games(&self) -> Result<u64, StoreError>;
}

assert_obj_safe!(GameStore);
