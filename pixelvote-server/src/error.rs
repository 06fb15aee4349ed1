use crate::configuration::ConfigurationError;
use crate::game::seed::SeedError;
use crate::store::error::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelvoteError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Invalid log filters: {0}")]
	LogFilter(#[from] tracing_subscriber::filter::ParseError),
	#[error("Failed to open store: {0}")]
	Store(#[from] StoreError),
	#[error("Failed to seed games: {0}")]
	Seed(#[from] SeedError),
	#[error("IO error while serving requests: {0}")]
	Server(#[from] std::io::Error),
}
