use crate::chat::model::{MAXIMUM_AUTHOR_LENGTH, MAXIMUM_ROOM_ID_LENGTH, MAXIMUM_TEXT_LENGTH};
use thiserror::Error;

/// Rejected input. Always detected before any store access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Room id must not be empty.")]
	EmptyRoomId,
	#[error("Room id must not be longer than {} bytes.", MAXIMUM_ROOM_ID_LENGTH)]
	RoomIdTooLong,
	#[error("Chat messages must not be empty!")]
	EmptyText,
	#[error("Chat messages must not be longer than {} characters.", MAXIMUM_TEXT_LENGTH)]
	TextTooLong,
	#[error("Name was empty or whitespace-only.")]
	EmptyName,
	#[error("Name must not be longer than {} bytes.", MAXIMUM_AUTHOR_LENGTH)]
	NameTooLong,
	#[error("Field '{0}' must be a string.")]
	NotAString(&'static str),
	#[error("Messages can only be sent to the room that was joined.")]
	NotJoined,
}
