use crate::chat::model::{AuthorName, RoomId};
use crate::connection::sender::MessageSender;
use crate::room::broadcast_channel::BroadcastChannel;
use crate::room::error::RoomError;
use crate::room::session_id::SessionId;
use crate::room::session_id_sequence::SessionIdSequence;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

/// Tracks the room and display name of every open connection.
///
/// A session is in at most one room. Joining another room leaves the previous one.
pub struct SessionManager {
	sessions: Mutex<Sessions>,
	broadcast_channel: BroadcastChannel,
}

#[derive(Default)]
struct Sessions {
	id_sequence: SessionIdSequence,
	by_id: HashMap<SessionId, Session>,
}

struct Session {
	message_sender: MessageSender,
	current_room: Option<RoomId>,
	display_name: AuthorName,
}

impl SessionManager {
	pub fn new(room_size_limit: usize) -> Self {
		Self {
			sessions: Default::default(),
			broadcast_channel: BroadcastChannel::with_limit(room_size_limit),
		}
	}

	pub fn broadcast_channel(&self) -> &BroadcastChannel {
		&self.broadcast_channel
	}

	pub fn open(&self, message_sender: MessageSender) -> SessionId {
		let mut sessions = self.sessions.lock();
		let session_id = sessions.id_sequence.next();
		let session = Session {
			message_sender,
			current_room: None,
			display_name: AuthorName::default(),
		};
		if sessions.by_id.insert(session_id, session).is_some() {
			unreachable!("There must never be two sessions with the same id!");
		}

		session_id
	}

	/// Subscribes the session to the room and makes it the current room.
	///
	/// On error nothing changes, the session stays in its previous room.
	pub fn join(&self, session_id: SessionId, room_id: RoomId) -> Result<(), RoomError> {
		// lock order: sessions, then broadcast groups
		let mut sessions = self.sessions.lock();
		let session = sessions.by_id.get_mut(&session_id).ok_or(RoomError::UnknownSession)?;

		self.broadcast_channel
			.subscribe(&room_id, session_id, session.message_sender.clone())?;

		let previous_room = session.current_room.replace(room_id.clone());
		if let Some(previous_room) = previous_room.filter(|previous_room| *previous_room != room_id) {
			self.broadcast_channel.unsubscribe(&previous_room, session_id);
			debug!(session_id = %session_id, room_id = %previous_room, "Left room");
		}
		debug!(session_id = %session_id, room_id = %room_id, "Joined room");

		Ok(())
	}

	pub fn set_display_name(&self, session_id: SessionId, name: Option<&str>) -> Result<AuthorName, RoomError> {
		let display_name = AuthorName::new(name.unwrap_or_default())?;

		let mut sessions = self.sessions.lock();
		let session = sessions.by_id.get_mut(&session_id).ok_or(RoomError::UnknownSession)?;
		session.display_name = display_name.clone();

		Ok(display_name)
	}

	pub fn author(&self, session_id: SessionId) -> Result<AuthorName, RoomError> {
		self.sessions
			.lock()
			.by_id
			.get(&session_id)
			.map(|session| session.display_name.clone())
			.ok_or(RoomError::UnknownSession)
	}

	pub fn current_room(&self, session_id: SessionId) -> Option<RoomId> {
		self.sessions
			.lock()
			.by_id
			.get(&session_id)
			.and_then(|session| session.current_room.clone())
	}

	/// Discards the session and removes it from every broadcast group.
	pub fn leave_all(&self, session_id: SessionId) {
		let mut sessions = self.sessions.lock();
		sessions.by_id.remove(&session_id);
		self.broadcast_channel.unsubscribe_all(session_id);
	}

	pub fn session_count(&self) -> usize {
		self.sessions.lock().by_id.len()
	}
}
