use crate::chat::ChatError;
use crate::chat::error::ValidationError;
use crate::game::error::GameValidationError;
use crate::store::error::StoreError;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Type-erased error response
///
/// NOTE: This type is inspired by RFC7807 (Problem Details for HTTP APIs) but spares on a lot of
/// the details to avoid complexity.
///
/// See: <https://www.rfc-editor.org/rfc/rfc7807.html>
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorResponse {
	pub r#type: String,
	pub status: u16,
	pub message: String,
}

impl ApiErrorResponse {
	fn new(r#type: &str, status: StatusCode, message: String) -> Self {
		Self {
			r#type: r#type.to_owned(),
			status: status.as_u16(),
			message,
		}
	}
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		let status_code = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		(status_code, Json(self)).into_response()
	}
}

impl From<StoreError> for ApiErrorResponse {
	fn from(error: StoreError) -> Self {
		match error {
			StoreError::NotFound => ApiErrorResponse::new("not-found", StatusCode::NOT_FOUND, error.to_string()),
			error => {
				error!(%error, "Store operation failed");
				ApiErrorResponse::new(
					"persistence-failed",
					StatusCode::INTERNAL_SERVER_ERROR,
					"The store is currently unavailable. Please try again later.".to_owned(),
				)
			}
		}
	}
}

impl From<GameValidationError> for ApiErrorResponse {
	fn from(error: GameValidationError) -> Self {
		use GameValidationError::*;
		let r#type = match error {
			MissingField(_) => "game-missing-field",
			DescriptionTooLong => "game-description-too-long",
		};
		ApiErrorResponse::new(r#type, StatusCode::BAD_REQUEST, error.to_string())
	}
}

impl From<ValidationError> for ApiErrorResponse {
	fn from(error: ValidationError) -> Self {
		use ValidationError::*;
		let r#type = match error {
			EmptyRoomId | RoomIdTooLong | NotAString("room_id") => "chat-invalid-room-id",
			EmptyName | NameTooLong | NotAString("author" | "name") => "chat-invalid-author",
			EmptyText | TextTooLong | NotAString(_) => "chat-invalid-text",
			NotJoined => "chat-not-joined",
		};
		ApiErrorResponse::new(r#type, StatusCode::BAD_REQUEST, error.to_string())
	}
}

impl From<ChatError> for ApiErrorResponse {
	fn from(error: ChatError) -> Self {
		match error {
			ChatError::Validation(validation_error) => validation_error.into(),
			ChatError::Persistence(store_error) => store_error.into(),
		}
	}
}

impl From<QueryRejection> for ApiErrorResponse {
	fn from(rejection: QueryRejection) -> Self {
		ApiErrorResponse::new("chat-invalid-limit", StatusCode::BAD_REQUEST, rejection.body_text())
	}
}
