use crate::configuration::Configuration;
use crate::room::session_manager::SessionManager;
use crate::store::error::StoreError;
use crate::store::{Store, create_store};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub store: Arc<dyn Store>,
	pub session_manager: Arc<SessionManager>,
}

impl ApplicationContext {
	pub async fn new(configuration: Configuration) -> Result<ApplicationContext, StoreError> {
		let store = create_store(&configuration.store).await?;
		Ok(Self::from_store(configuration, store))
	}

	pub fn from_store(configuration: Configuration, store: Arc<dyn Store>) -> ApplicationContext {
		let session_manager = Arc::new(SessionManager::new(configuration.room_size_limit));
		Self {
			configuration,
			store,
			session_manager,
		}
	}
}

#[cfg(test)]
impl ApplicationContext {
	pub fn for_tests(store: Arc<dyn Store>) -> ApplicationContext {
		use crate::configuration::StoreConfiguration;
		use std::net::{Ipv6Addr, SocketAddr};

		let configuration = Configuration {
			address: SocketAddr::from((Ipv6Addr::LOCALHOST, 0)),
			log_filters: "debug".to_owned(),
			room_size_limit: 10,
			history_limit: crate::chat::DEFAULT_HISTORY_LIMIT,
			store: StoreConfiguration::Memory,
		};
		Self::from_store(configuration, store)
	}
}
