use crate::game::model::{Game, NewGame, Vote};
use crate::game::store::GameStore;
use crate::store::error::StoreError;
use crate::store::sqlite::SqliteStore;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{query, query_as};
use uuid::Uuid;

#[async_trait]
impl GameStore for SqliteStore {
	async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
		query_as(
			r"SELECT
				uuid,
				title,
				description,
				game_url,
				image_url,
				x_profile,
				votes,
				created_at
			FROM game
			ORDER BY votes DESC, sequence ASC",
		)
		.fetch_all(&self.pool)
		.await
		.map_err(Into::into)
	}

	async fn create_game(&self, game: &NewGame) -> Result<Game, StoreError> {
		query_as(
			r"INSERT INTO game (uuid, title, description, game_url, image_url, x_profile, votes, created_at)
			VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
			RETURNING
				uuid,
				title,
				description,
				game_url,
				image_url,
				x_profile,
				votes,
				created_at",
		)
		.bind(Uuid::new_v4())
		.bind(game.title())
		.bind(game.description())
		.bind(game.game_url())
		.bind(game.image_url())
		.bind(game.x_profile())
		.bind(game.initial_votes())
		.bind(Utc::now())
		.fetch_one(&self.pool)
		.await
		.map_err(Into::into)
	}

	async fn vote_game(&self, game_uuid: Uuid, vote: Vote) -> Result<Game, StoreError> {
		query_as(
			r"UPDATE game
			SET votes = votes + ?1
			WHERE uuid = ?2
			RETURNING
				uuid,
				title,
				description,
				game_url,
				image_url,
				x_profile,
				votes,
				created_at",
		)
		.bind(vote.delta())
		.bind(game_uuid)
		.fetch_optional(&self.pool)
		.await?
		.ok_or(StoreError::NotFound)
	}

	async fn remove_all_games(&self) -> Result<u64, StoreError> {
		let result = query(r"DELETE FROM game").execute(&self.pool).await?;
		Ok(result.rows_affected())
	}
}
