use crate::chat::DEFAULT_HISTORY_LIMIT;
use serde::Deserialize;
use std::fs::read_to_string;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Configuration {
	#[serde(with = "socket_addr_deserializer")]
	pub address: SocketAddr,
	pub log_filters: String,
	pub room_size_limit: usize,
	#[serde(default = "default_history_limit")]
	pub history_limit: usize,
	#[serde(default)]
	pub store: StoreConfiguration,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreConfiguration {
	#[default]
	Memory,
	Sqlite(SqliteConfiguration),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SqliteConfiguration {
	pub database_url: String,
	#[serde(default = "default_max_connections")]
	pub max_connections: u32,
	#[serde(default = "default_acquire_timeout", with = "humantime_serde")]
	pub acquire_timeout: Duration,
	/// Run on the in-memory store if the database can't be opened.
	#[serde(default)]
	pub fall_back_to_memory: bool,
}

fn default_history_limit() -> usize {
	DEFAULT_HISTORY_LIMIT
}

fn default_max_connections() -> u32 {
	8
}

fn default_acquire_timeout() -> Duration {
	Duration::from_secs(5)
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
}

// See https://serde.rs/custom-date-format.html
mod socket_addr_deserializer {
	use serde::{self, Deserialize, Deserializer};
	use std::net::SocketAddr;
	use std::str::FromStr;

	pub fn deserialize<'deserializer, D>(deserializer: D) -> Result<SocketAddr, D::Error>
	where
		D: Deserializer<'deserializer>,
	{
		let string = String::deserialize(deserializer)?;
		SocketAddr::from_str(string.as_str()).map_err(serde::de::Error::custom)
	}
}
