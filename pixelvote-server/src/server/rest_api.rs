use crate::chat::model::{AuthorName, RoomId};
use crate::chat::post_message;
use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::game::model::{NewGame, Vote};
use crate::room::session_manager::SessionManager;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::models::{
	GameResponse, GameSubmissionRequest, HistoryQuery, MessageResponse, PostMessageRequest,
};
use crate::store::Store;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use uuid::Uuid;

pub mod error;
pub mod models;

pub fn rest_api() -> Router<ApplicationContext> {
	Router::new()
		.route("/games", get(list_games).post(submit_game))
		.route("/games/{game_id}/upvote", post(upvote_game))
		.route("/games/{game_id}/downvote", post(downvote_game))
		.route("/rooms/{room_id}/messages", get(recent_messages).post(send_message))
		.layer(CorsLayer::permissive())
}

/// Response wrapper for HTTP Status Code 201 CREATED
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
	fn into_response(self) -> Response {
		(StatusCode::CREATED, self.0).into_response()
	}
}

/// Games sorted by votes, highest first.
async fn list_games(State(store): State<Arc<dyn Store>>) -> Result<Json<Vec<GameResponse>>, ApiErrorResponse> {
	let games = store.games().list_games().await?;
	Ok(Json(games.into_iter().map(GameResponse::from).collect()))
}

async fn submit_game(
	State(store): State<Arc<dyn Store>>,
	Json(request): Json<GameSubmissionRequest>,
) -> Result<Created<Json<GameResponse>>, ApiErrorResponse> {
	let new_game = NewGame::try_from(&request)?;
	let game = store.games().create_game(&new_game).await?;
	info!(game = %game.uuid, title = %game.title, "Game submitted");

	Ok(Created(Json(game.into())))
}

async fn upvote_game(
	State(store): State<Arc<dyn Store>>,
	Path(game_id): Path<Uuid>,
) -> Result<Json<GameResponse>, ApiErrorResponse> {
	vote_game(store.as_ref(), game_id, Vote::Up).await
}

async fn downvote_game(
	State(store): State<Arc<dyn Store>>,
	Path(game_id): Path<Uuid>,
) -> Result<Json<GameResponse>, ApiErrorResponse> {
	vote_game(store.as_ref(), game_id, Vote::Down).await
}

async fn vote_game(store: &dyn Store, game_id: Uuid, vote: Vote) -> Result<Json<GameResponse>, ApiErrorResponse> {
	let game = store.games().vote_game(game_id, vote).await?;
	Ok(Json(game.into()))
}

/// At most `history_limit` messages, oldest first.
async fn recent_messages(
	State(store): State<Arc<dyn Store>>,
	State(configuration): State<Configuration>,
	Path(room_id): Path<String>,
	query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<MessageResponse>>, ApiErrorResponse> {
	let room_id = RoomId::new(&room_id)?;
	let Query(HistoryQuery { limit }) = query?;
	let limit = limit
		.unwrap_or(configuration.history_limit)
		.min(configuration.history_limit);

	let messages = store.messages().recent(&room_id, limit).await?;
	Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Same validation as over the websocket. The message is published to everyone in the room.
async fn send_message(
	State(store): State<Arc<dyn Store>>,
	State(session_manager): State<Arc<SessionManager>>,
	Path(room_id): Path<String>,
	Json(request): Json<PostMessageRequest>,
) -> Result<Created<Json<MessageResponse>>, ApiErrorResponse> {
	let room_id = RoomId::new(&room_id)?;
	let author = AuthorName::or_anonymous(request.author()?)?;
	let text = request.text()?;

	let message = post_message(
		store.messages(),
		session_manager.broadcast_channel(),
		&room_id,
		&author,
		text,
	)
	.await?;

	Ok(Created(Json(message.into())))
}
