use crate::game::error::GameValidationError;
use crate::game::model::{Game, NewGame};
use crate::game::store::GameStore;
use crate::store::error::StoreError;
use thiserror::Error;
use tracing::info;

struct SampleGame {
	title: &'static str,
	description: &'static str,
	game_url: &'static str,
	image_url: &'static str,
	x_profile: &'static str,
	votes: i64,
}

const SAMPLE_GAMES: [SampleGame; 5] = [
	SampleGame {
		title: "Pixel Jumper",
		description: "An AI-generated retro jump and run. Leap over obstacles and collect coins!",
		game_url: "https://example.com/pixeljumper",
		image_url: "https://via.placeholder.com/300x200.png?text=Pixel+Jumper",
		x_profile: "@pixeljumper",
		votes: 15,
	},
	SampleGame {
		title: "Space Invaders AI",
		description: "A modern AI take on the Space Invaders classic with procedurally generated enemies.",
		game_url: "https://example.com/spaceinvaders",
		image_url: "https://via.placeholder.com/300x200.png?text=Space+Invaders+AI",
		x_profile: "@aispacegames",
		votes: 23,
	},
	SampleGame {
		title: "Dungeon Explorer",
		description: "Explore procedurally generated dungeons in a roguelike built entirely by an AI.",
		game_url: "https://example.com/dungeonexplorer",
		image_url: "https://via.placeholder.com/300x200.png?text=Dungeon+Explorer",
		x_profile: "@dungeonai",
		votes: 8,
	},
	SampleGame {
		title: "Retro Racer",
		description: "An 80s style racing game with AI-generated tracks and cars.",
		game_url: "https://example.com/retroracer",
		image_url: "https://via.placeholder.com/300x200.png?text=Retro+Racer",
		x_profile: "@retroracergame",
		votes: 19,
	},
	SampleGame {
		title: "AI Chess Master",
		description: "Chess against an AI that did not only play the game but designed it as well.",
		game_url: "https://example.com/aichess",
		image_url: "https://via.placeholder.com/300x200.png?text=AI+Chess+Master",
		x_profile: "",
		votes: 12,
	},
];

#[derive(Error, Debug)]
pub enum SeedError {
	#[error("Invalid sample game: {0}")]
	InvalidSampleGame(#[from] GameValidationError),
	#[error("Failed to store sample games: {0}")]
	Store(#[from] StoreError),
}

/// Replaces all games with the sample catalogue.
pub async fn seed_games(store: &dyn GameStore) -> Result<Vec<Game>, SeedError> {
	let sample_games = SAMPLE_GAMES
		.iter()
		.map(|sample| {
			NewGame::new(
				sample.title,
				sample.description,
				sample.game_url,
				sample.image_url,
				Some(sample.x_profile),
			)
			.map(|game| game.with_initial_votes(sample.votes))
		})
		.collect::<Result<Vec<_>, _>>()?;

	let removed = store.remove_all_games().await?;
	info!(removed, "Removed existing games");

	let mut games = Vec::with_capacity(sample_games.len());
	for sample_game in &sample_games {
		games.push(store.create_game(sample_game).await?);
	}
	info!(inserted = games.len(), "Inserted sample games");

	Ok(games)
}
