use crate::chat::model::RoomId;
use crate::connection::sender::MessageSender;
use crate::message::outgoing::broadcast_message::BroadcastMessage;
use crate::room::error::RoomError;
use crate::room::session_id::SessionId;
use futures_util::future::join_all;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

type Group = BTreeMap<SessionId, MessageSender>;

/// Fan-out of broadcasts to every session subscribed to a room.
#[derive(Clone)]
pub struct BroadcastChannel {
	inner: Arc<BroadcastChannelInner>,
}

struct BroadcastChannelInner {
	groups: Mutex<HashMap<RoomId, Group>>,
	room_size_limit: usize,
}

impl BroadcastChannel {
	pub fn with_limit(room_size_limit: usize) -> Self {
		let inner = BroadcastChannelInner {
			groups: Default::default(),
			room_size_limit,
		};
		Self { inner: Arc::new(inner) }
	}

	/// Subscribing twice is a no-op, even when the room is full.
	pub fn subscribe(
		&self,
		room_id: &RoomId,
		session_id: SessionId,
		message_sender: MessageSender,
	) -> Result<(), RoomError> {
		let mut groups = self.inner.groups.lock();

		let group = groups.get(room_id);
		if group.is_some_and(|group| group.contains_key(&session_id)) {
			return Ok(());
		}

		if group.map_or(0, Group::len) >= self.inner.room_size_limit {
			return Err(RoomError::RoomFull);
		}

		groups
			.entry(room_id.clone())
			.or_default()
			.insert(session_id, message_sender);
		Ok(())
	}

	/// Returns whether the session had been subscribed.
	pub fn unsubscribe(&self, room_id: &RoomId, session_id: SessionId) -> bool {
		let mut groups = self.inner.groups.lock();
		let Some(group) = groups.get_mut(room_id) else {
			return false;
		};

		let removed = group.remove(&session_id).is_some();
		if group.is_empty() {
			groups.remove(room_id);
		}
		removed
	}

	pub fn unsubscribe_all(&self, session_id: SessionId) {
		self.inner.groups.lock().retain(|_room_id, group| {
			group.remove(&session_id);
			!group.is_empty()
		});
	}

	pub fn subscriber_count(&self, room_id: &RoomId) -> usize {
		self.inner.groups.lock().get(room_id).map_or(0, Group::len)
	}

	/// Delivers the message to every subscriber of the room, the originator included.
	///
	/// Failed deliveries are skipped. Returns the number of successful deliveries.
	pub async fn publish(&self, room_id: &RoomId, message: BroadcastMessage) -> usize {
		// the lock must not be held while sending
		let subscribers = self
			.inner
			.groups
			.lock()
			.get(room_id)
			.map(|group| {
				group
					.iter()
					.map(|(session_id, message_sender)| (*session_id, message_sender.clone()))
					.collect::<Vec<_>>()
			})
			.unwrap_or_default();

		let deliveries = subscribers.iter().map(|(session_id, message_sender)| {
			let message = message.clone();
			async move {
				if message_sender.is_closed() {
					return false;
				}

				let delivered = message_sender.send_broadcast_message(message).await.is_ok();
				if !delivered {
					debug!(session_id = %session_id, room_id = %room_id, "Skipped broadcast to closed connection");
				}
				delivered
			}
		});

		join_all(deliveries).await.into_iter().filter(|delivered| *delivered).count()
	}
}
