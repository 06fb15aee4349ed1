use crate::chat::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::{Database, Decode, FromRow};
use uuid::Uuid;

pub const MAXIMUM_ROOM_ID_LENGTH: usize = 128;
pub const MAXIMUM_AUTHOR_LENGTH: usize = 256;
pub const MAXIMUM_TEXT_LENGTH: usize = 2000;

/// Author of every message sent without a display name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Implements the string conversions and the sqlx decoding for a validated text newtype.
///
/// Values coming out of the database are not validated again.
macro_rules! validated_text {
	($name: ident) => {
		impl $name {
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}

		impl TryFrom<String> for $name {
			type Error = ValidationError;

			fn try_from(text: String) -> Result<Self, Self::Error> {
				Self::new(&text)
			}
		}

		impl From<$name> for String {
			fn from($name(text): $name) -> Self {
				text
			}
		}

		impl<'r, Db> Decode<'r, Db> for $name
		where
			Db: Database,
			String: Decode<'r, Db>,
		{
			fn decode(value: <Db as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
				String::decode(value).map($name)
			}
		}

		impl<Db> sqlx::Type<Db> for $name
		where
			Db: Database,
			String: sqlx::Type<Db>,
		{
			fn type_info() -> Db::TypeInfo {
				String::type_info()
			}

			fn compatible(type_info: &Db::TypeInfo) -> bool {
				String::compatible(type_info)
			}
		}
	};
}

/// Identifies a game room. Every game page has its own room.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
	pub fn new(room_id: &str) -> Result<Self, ValidationError> {
		let room_id = room_id.trim();
		if room_id.is_empty() {
			return Err(ValidationError::EmptyRoomId);
		}

		if room_id.len() > MAXIMUM_ROOM_ID_LENGTH {
			return Err(ValidationError::RoomIdTooLong);
		}

		Ok(Self(room_id.to_owned()))
	}
}

validated_text!(RoomId);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorName(String);

impl AuthorName {
	pub fn new(name: &str) -> Result<Self, ValidationError> {
		let name = name.trim();
		if name.is_empty() {
			return Err(ValidationError::EmptyName);
		}

		if name.len() > MAXIMUM_AUTHOR_LENGTH {
			return Err(ValidationError::NameTooLong);
		}

		Ok(Self(name.to_owned()))
	}

	/// Like [`AuthorName::new`] but a missing or blank name falls back to the anonymous author.
	pub fn or_anonymous(name: Option<&str>) -> Result<Self, ValidationError> {
		match name {
			Some(name) if !name.trim().is_empty() => Self::new(name),
			_ => Ok(Self::default()),
		}
	}
}

impl Default for AuthorName {
	fn default() -> Self {
		Self(ANONYMOUS_AUTHOR.to_owned())
	}
}

validated_text!(AuthorName);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct MessageText(String);

impl MessageText {
	pub fn new(text: &str) -> Result<Self, ValidationError> {
		let text = text.trim();
		if text.is_empty() {
			return Err(ValidationError::EmptyText);
		}

		if text.chars().count() > MAXIMUM_TEXT_LENGTH {
			return Err(ValidationError::TextTooLong);
		}

		Ok(Self(text.to_owned()))
	}
}

validated_text!(MessageText);

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
	pub uuid: Uuid,
	pub room_id: RoomId,
	pub author: AuthorName,
	pub text: MessageText,
	pub created_at: DateTime<Utc>,
}
