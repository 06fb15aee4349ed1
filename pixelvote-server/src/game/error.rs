use crate::game::model::MAXIMUM_DESCRIPTION_LENGTH;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameValidationError {
	#[error("Field '{0}' is required.")]
	MissingField(&'static str),
	#[error("Description must not be longer than {} characters.", MAXIMUM_DESCRIPTION_LENGTH)]
	DescriptionTooLong,
}
