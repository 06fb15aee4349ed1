use crate::chat::store::MessageStore;
use crate::configuration::{SqliteConfiguration, StoreConfiguration};
use crate::game::store::GameStore;
use crate::store::error::StoreError;
use crate::store::memory::InMemoryStore;
use crate::store::sqlite::SqliteStore;
use static_assertions::assert_obj_safe;
use std::sync::Arc;
use tracing::{info, warn};

pub mod error;
pub mod memory;
pub mod sqlite;

/// Everything the server persists, selected once at startup.
pub trait Store: MessageStore + GameStore + Send + Sync + 'static {
	fn messages(&self) -> &dyn MessageStore;
	fn games(&self) -> &dyn GameStore;
}

assert_obj_safe!(Store);

pub async fn create_store(configuration: &StoreConfiguration) -> Result<Arc<dyn Store>, StoreError> {
	let SqliteConfiguration {
		database_url,
		max_connections,
		acquire_timeout,
		fall_back_to_memory,
	} = match configuration {
		StoreConfiguration::Memory => {
			info!("Using in-memory store. Nothing will be persisted across restarts.");
			return Ok(Arc::new(InMemoryStore::default()));
		}
		StoreConfiguration::Sqlite(sqlite_configuration) => sqlite_configuration,
	};

	match SqliteStore::connect(database_url, *max_connections, *acquire_timeout).await {
		Ok(store) => {
			info!(database_url = %database_url, "Using SQLite store");
			Ok(Arc::new(store))
		}
		Err(error) if *fall_back_to_memory => {
			warn!(%error, "Failed to open SQLite store, falling back to in-memory store");
			Ok(Arc::new(InMemoryStore::default()))
		}
		Err(error) => Err(error),
	}
}

#[cfg(test)]
pub(crate) mod failing;
#[cfg(test)]
pub(crate) mod stalling;


#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	fn unreachable_sqlite(fall_back_to_memory: bool) -> StoreConfiguration {
		StoreConfiguration::Sqlite(SqliteConfiguration {
			database_url: "sqlite:///this/directory/does/not/exist/pixelvote.db".to_owned(),
			max_connections: 1,
			acquire_timeout: Duration::from_secs(1),
			fall_back_to_memory,
		})
	}

	#[tokio::test]
	async fn should_create_memory_store() {
		let store = create_store(&StoreConfiguration::Memory)
			.await
			.expect("Failed to create memory store");

		let games = store.games().list_games().await.expect("Failed to list games");
		assert!(games.is_empty());
	}

	#[tokio::test]
	async fn should_fall_back_to_memory_when_configured() {
		let store = create_store(&unreachable_sqlite(true))
			.await
			.expect("Did not fall back to memory store");

		let games = store.games().list_games().await.expect("Failed to list games");
		assert!(games.is_empty());
	}

	#[tokio::test]
	async fn should_fail_when_sqlite_is_unreachable_without_fallback() {
		let result = create_store(&unreachable_sqlite(false)).await;

		assert!(result.is_err());
	}
}
