use crate::chat::error::ValidationError;
use crate::chat::model::ChatMessage;
use crate::game::error::GameValidationError;
use crate::game::model::{Game, NewGame};
use crate::message::client_request::string_field;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameSubmissionRequest {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub game_url: String,
	#[serde(default)]
	pub image_url: String,
	#[serde(default)]
	pub x_profile: Option<String>,
}

impl TryFrom<&GameSubmissionRequest> for NewGame {
	type Error = GameValidationError;

	fn try_from(request: &GameSubmissionRequest) -> Result<Self, Self::Error> {
		NewGame::new(
			&request.title,
			&request.description,
			&request.game_url,
			&request.image_url,
			request.x_profile.as_deref(),
		)
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GameResponse {
	pub id: Uuid,
	pub title: String,
	pub description: String,
	pub game_url: String,
	pub image_url: String,
	pub x_profile: String,
	pub votes: i64,
	pub created_at: DateTime<Utc>,
}

impl From<Game> for GameResponse {
	fn from(game: Game) -> Self {
		Self {
			id: game.uuid,
			title: game.title,
			description: game.description,
			game_url: game.game_url,
			image_url: game.image_url,
			x_profile: game.x_profile,
			votes: game.votes,
			created_at: game.created_at,
		}
	}
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
	pub limit: Option<usize>,
}

/// Kept as raw JSON to reject wrong types the same way the websocket does.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PostMessageRequest {
	#[serde(default)]
	pub author: Option<Value>,
	#[serde(default)]
	pub text: Option<Value>,
}

impl PostMessageRequest {
	pub fn author(&self) -> Result<Option<&str>, ValidationError> {
		string_field(self.author.as_ref(), "author")
	}

	pub fn text(&self) -> Result<Option<&str>, ValidationError> {
		string_field(self.text.as_ref(), "text")
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
	pub id: Uuid,
	pub room_id: String,
	pub author: String,
	pub text: String,
	pub created_at: DateTime<Utc>,
}

impl From<ChatMessage> for MessageResponse {
	fn from(message: ChatMessage) -> Self {
		Self {
			id: message.uuid,
			room_id: message.room_id.into(),
			author: message.author.into(),
			text: message.text.into(),
			created_at: message.created_at,
		}
	}
}
