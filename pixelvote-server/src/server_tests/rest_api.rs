use crate::message::outgoing::broadcast_message::{BroadcastMessage, ChatBroadcast};
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::models::{GameResponse, MessageResponse};
use crate::server_tests::test_client::TestClient;
use crate::server_tests::{join_room, start_test_server};
use reqwest::StatusCode;
use serde_json::{Value, json};

fn game_submission(title: &str) -> Value {
	json!({
		"title": title,
		"description": "A game about voting",
		"game_url": "https://example.com/game",
		"image_url": "https://example.com/game.png",
	})
}

async fn submit_game(test_client: &TestClient, title: &str) -> GameResponse {
	let response = test_client
		.post("/api/games")
		.json(&game_submission(title))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::CREATED, response.status());
	response.json().await.expect("Failed to parse game JSON")
}

async fn list_games(test_client: &TestClient) -> Vec<GameResponse> {
	test_client
		.get("/api/games")
		.send()
		.await
		.expect("Request failed.")
		.json()
		.await
		.expect("Failed to parse games JSON")
}

async fn post_message(test_client: &TestClient, room_id: &str, body: Value) -> reqwest::Response {
	test_client
		.post(&format!("/api/rooms/{room_id}/messages"))
		.json(&body)
		.send()
		.await
		.expect("Request failed.")
}

async fn recent_messages(test_client: &TestClient, path: &str) -> Vec<MessageResponse> {
	let response = test_client.get(path).send().await.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	response.json().await.expect("Failed to parse messages JSON")
}

#[tokio::test]
async fn should_list_games_by_votes() {
	let test_client = start_test_server().await;
	let first = submit_game(&test_client, "First").await;
	let second = submit_game(&test_client, "Second").await;
	assert_eq!(0, second.votes);

	let response = test_client
		.post(&format!("/api/games/{}/upvote", second.id))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	let upvoted: GameResponse = response.json().await.expect("Failed to parse game JSON");
	assert_eq!(1, upvoted.votes);

	let titles = list_games(&test_client)
		.await
		.into_iter()
		.map(|game| game.title)
		.collect::<Vec<_>>();
	assert_eq!(vec![second.title, first.title], titles);
}

#[tokio::test]
async fn downvotes_should_allow_negative_scores() {
	let test_client = start_test_server().await;
	let game = submit_game(&test_client, "Unpopular").await;

	let response = test_client
		.post(&format!("/api/games/{}/downvote", game.id))
		.send()
		.await
		.expect("Request failed.");

	let downvoted: GameResponse = response.json().await.expect("Failed to parse game JSON");
	assert_eq!(-1, downvoted.votes);
}

#[tokio::test]
async fn should_not_find_votes_for_unknown_games() {
	let test_client = start_test_server().await;

	let response = test_client
		.post(&format!("/api/games/{}/upvote", uuid::Uuid::new_v4()))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
	let error: ApiErrorResponse = response.json().await.expect("Failed to parse error JSON");
	assert_eq!("not-found", error.r#type);
}

#[tokio::test]
async fn should_reject_games_without_title() {
	let test_client = start_test_server().await;

	let response = test_client
		.post("/api/games")
		.json(&game_submission("   "))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	let error: ApiErrorResponse = response.json().await.expect("Failed to parse error JSON");
	assert_eq!("game-missing-field", error.r#type);
	assert!(list_games(&test_client).await.is_empty());
}

#[tokio::test]
async fn should_post_and_fetch_chat_messages() {
	let test_client = start_test_server().await;

	let response = post_message(&test_client, "g1", json!({"text": " hello "})).await;
	assert_eq!(StatusCode::CREATED, response.status());
	let posted: MessageResponse = response.json().await.expect("Failed to parse message JSON");

	assert_eq!("hello", posted.text);
	assert_eq!("Anonymous", posted.author);
	assert_eq!(vec![posted], recent_messages(&test_client, "/api/rooms/g1/messages").await);
	assert!(recent_messages(&test_client, "/api/rooms/g2/messages").await.is_empty());
}

#[tokio::test]
async fn should_limit_the_fetched_history() {
	let test_client = start_test_server().await;
	for text in ["one", "two", "three"] {
		post_message(&test_client, "g1", json!({"author": "Ferris", "text": text})).await;
	}

	let messages = recent_messages(&test_client, "/api/rooms/g1/messages?limit=2").await;

	let texts = messages.iter().map(|message| message.text.as_str()).collect::<Vec<_>>();
	assert_eq!(vec!["two", "three"], texts);
	assert!(messages.iter().all(|message| message.author == "Ferris"));
}

#[tokio::test]
async fn should_reject_invalid_chat_messages() {
	let test_client = start_test_server().await;

	for body in [json!({"text": ""}), json!({"text": null}), json!({}), json!({"text": 42})] {
		let response = post_message(&test_client, "g1", body).await;
		assert_eq!(StatusCode::BAD_REQUEST, response.status());
		let error: ApiErrorResponse = response.json().await.expect("Failed to parse error JSON");
		assert_eq!("chat-invalid-text", error.r#type);
	}

	assert!(recent_messages(&test_client, "/api/rooms/g1/messages").await.is_empty());
}

#[tokio::test]
async fn posted_messages_should_be_broadcast_to_the_room() {
	let test_client = start_test_server().await;
	let mut websocket = test_client.websocket().await;
	join_room(&mut websocket, "g1").await;

	let response = post_message(&test_client, "g1", json!({"author": "Ferris", "text": "via REST"})).await;
	let posted: MessageResponse = response.json().await.expect("Failed to parse message JSON");

	let BroadcastMessage::Chat(ChatBroadcast { id, author, text, .. }) = websocket.receive_broadcast_message().await;
	assert_eq!(posted.id, id);
	assert_eq!("Ferris", author);
	assert_eq!("via REST", text);
}

#[tokio::test]
async fn should_reject_invalid_history_limits() {
	let test_client = start_test_server().await;

	for limit in ["abc", "-1"] {
		let response = test_client
			.get(&format!("/api/rooms/g1/messages?limit={limit}"))
			.send()
			.await
			.expect("Request failed.");

		assert_eq!(StatusCode::BAD_REQUEST, response.status());
		let error: ApiErrorResponse = response.json().await.expect("Failed to parse error JSON");
		assert_eq!("chat-invalid-limit", error.r#type);
		assert_eq!(400, error.status);
	}
}
