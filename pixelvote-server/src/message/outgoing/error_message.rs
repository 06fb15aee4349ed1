use crate::chat::ChatError;
use crate::chat::error::ValidationError;
use crate::room::error::RoomError;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, TypedBuilder)]
pub struct ErrorMessage {
	pub error: ErrorMessageType,
	pub message: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMessageType {
	InvalidFormat,
	InvalidOperation,
	InvalidRoomId,
	InvalidChatMessage,
	InvalidName,
	NotJoined,
	RoomFull,
	HistoryUnavailable,
	PersistenceFailed,
	InternalServerError,
}

impl From<ValidationError> for ErrorMessage {
	fn from(error: ValidationError) -> Self {
		use ValidationError::*;
		let error_type = match error {
			EmptyRoomId | RoomIdTooLong | NotAString("room_id") => ErrorMessageType::InvalidRoomId,
			EmptyName | NameTooLong | NotAString("name") => ErrorMessageType::InvalidName,
			EmptyText | TextTooLong | NotAString(_) => ErrorMessageType::InvalidChatMessage,
			NotJoined => ErrorMessageType::NotJoined,
		};

		ErrorMessage::builder()
			.error(error_type)
			.message(error.to_string())
			.build()
	}
}

impl From<RoomError> for ErrorMessage {
	fn from(error: RoomError) -> Self {
		let error_type = match error {
			RoomError::Validation(validation_error) => return validation_error.into(),
			RoomError::RoomFull => ErrorMessageType::RoomFull,
			RoomError::UnknownSession => ErrorMessageType::InternalServerError,
		};

		ErrorMessage::builder()
			.error(error_type)
			.message(error.to_string())
			.build()
	}
}

impl From<ChatError> for ErrorMessage {
	fn from(error: ChatError) -> Self {
		match error {
			ChatError::Validation(validation_error) => validation_error.into(),
			// details of the store stay in the server log
			ChatError::Persistence(_) => ErrorMessage::builder()
				.error(ErrorMessageType::PersistenceFailed)
				.message("Failed to store chat message. Please try again later.".to_string())
				.build(),
		}
	}
}
