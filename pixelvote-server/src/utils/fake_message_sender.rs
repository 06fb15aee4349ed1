use crate::connection::sender::{MessageSender, MessageSenderTrait};
use crate::message::outgoing::broadcast_message::BroadcastMessage;
use crate::message::outgoing::error_message::ErrorMessage;
use crate::message::outgoing::success_message::SuccessMessage;
use async_trait::async_trait;
use js_int::UInt;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Records broadcasts instead of sending them. Clones share their state.
#[derive(Clone, Debug, Default)]
pub struct FakeMessageSender {
	inner: Arc<FakeMessageSenderInner>,
}

#[derive(Debug, Default)]
struct FakeMessageSenderInner {
	broadcasts: Mutex<Vec<BroadcastMessage>>,
	failing: bool,
	closed: AtomicBool,
}

impl FakeMessageSender {
	/// Every send fails as if the connection had gone away without being marked as closed.
	pub fn failing() -> Self {
		let inner = FakeMessageSenderInner {
			failing: true,
			..Default::default()
		};
		Self { inner: Arc::new(inner) }
	}

	pub fn mark_closed(&self) {
		self.inner.closed.store(true, Ordering::SeqCst);
	}

	pub fn broadcasts(&self) -> Vec<BroadcastMessage> {
		self.inner.broadcasts.lock().clone()
	}
}

impl From<FakeMessageSender> for MessageSender {
	fn from(fake_message_sender: FakeMessageSender) -> Self {
		Arc::pin(fake_message_sender)
	}
}

#[async_trait]
impl MessageSenderTrait for FakeMessageSender {
	async fn send_success_message(&self, _message: SuccessMessage, _request_id: UInt) -> Result<(), ()> {
		if self.inner.failing { Err(()) } else { Ok(()) }
	}

	async fn send_error_message(&self, _message: ErrorMessage, _request_id: Option<UInt>) -> Result<(), ()> {
		if self.inner.failing { Err(()) } else { Ok(()) }
	}

	async fn send_broadcast_message(&self, message: BroadcastMessage) -> Result<(), ()> {
		if self.inner.failing || self.is_closed() {
			return Err(());
		}

		self.inner.broadcasts.lock().push(message);
		Ok(())
	}

	async fn close(&self) {
		self.mark_closed();
	}

	fn is_closed(&self) -> bool {
		self.inner.closed.load(Ordering::SeqCst)
	}
}
