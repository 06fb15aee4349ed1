use crate::chat::store::MessageStore;
use crate::game::store::GameStore;
use crate::store::Store;
use crate::store::error::{IntoStoreResult, StoreError};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{SqlitePool, migrate};
use std::time::Duration;

mod chat;
mod game;

#[derive(Clone)]
pub struct SqliteStore {
	pool: SqlitePool,
}

impl SqliteStore {
	pub async fn connect(
		database_url: &str,
		max_connections: u32,
		acquire_timeout: Duration,
	) -> Result<Self, StoreError> {
		let pool = SqlitePoolOptions::new()
			.max_connections(max_connections)
			.acquire_timeout(acquire_timeout)
			.connect(database_url)
			.await
			.connection_error("Failed to connect to database")?;
		let store = Self { pool };
		store.migrate().await?;

		Ok(store)
	}

	async fn migrate(&self) -> Result<(), StoreError> {
		migrate!().run(&self.pool).await.map_err(Into::into)
	}
}

impl Store for SqliteStore {
	fn messages(&self) -> &dyn MessageStore {
		self
	}

	fn games(&self) -> &dyn GameStore {
		self
	}
}
