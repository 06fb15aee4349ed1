use crate::chat::error::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error("Can't join, room is already full.")]
	RoomFull,
	#[error("Session is not open.")]
	UnknownSession,
}
