use crate::commandline::Commandline;
use crate::error::PixelvoteError;
use clap::Parser;

mod chat;
mod commandline;
mod configuration;
mod connection;
mod context;
mod error;
mod game;
mod lifecycle;
mod message;
mod room;
mod server;
mod store;
mod utils;

#[tokio::main]
async fn main() -> Result<(), PixelvoteError> {
	let commandline = Commandline::parse();
	commandline.run().await
}
