use crate::game::error::GameValidationError;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const MAXIMUM_DESCRIPTION_LENGTH: usize = 200;

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Game {
	pub uuid: Uuid,
	pub title: String,
	pub description: String,
	pub game_url: String,
	pub image_url: String,
	pub x_profile: String,
	pub votes: i64,
	pub created_at: DateTime<Utc>,
}

/// A validated game submission. All fields are stored trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewGame {
	title: String,
	description: String,
	game_url: String,
	image_url: String,
	x_profile: String,
	initial_votes: i64,
}

impl NewGame {
	pub fn new(
		title: &str,
		description: &str,
		game_url: &str,
		image_url: &str,
		x_profile: Option<&str>,
	) -> Result<Self, GameValidationError> {
		let description = required("description", description)?;
		if description.chars().count() > MAXIMUM_DESCRIPTION_LENGTH {
			return Err(GameValidationError::DescriptionTooLong);
		}

		Ok(Self {
			title: required("title", title)?,
			description,
			game_url: required("game_url", game_url)?,
			image_url: required("image_url", image_url)?,
			x_profile: x_profile.map(str::trim).unwrap_or_default().to_owned(),
			initial_votes: 0,
		})
	}

	/// Only used for seeding, submitted games always start at zero votes.
	#[must_use]
	pub fn with_initial_votes(self, initial_votes: i64) -> Self {
		Self { initial_votes, ..self }
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn game_url(&self) -> &str {
		&self.game_url
	}

	pub fn image_url(&self) -> &str {
		&self.image_url
	}

	pub fn x_profile(&self) -> &str {
		&self.x_profile
	}

	pub fn initial_votes(&self) -> i64 {
		self.initial_votes
	}
}

fn required(field: &'static str, value: &str) -> Result<String, GameValidationError> {
	let value = value.trim();
	if value.is_empty() {
		Err(GameValidationError::MissingField(field))
	} else {
		Ok(value.to_owned())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vote {
	Up,
	Down,
}

impl Vote {
	pub fn delta(self) -> i64 {
		match self {
			Vote::Up => 1,
			Vote::Down => -1,
		}
	}
}
