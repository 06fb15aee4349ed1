use crate::message::WebSocketMessage;
use crate::message::outgoing::OutgoingMessage;
use crate::message::outgoing::broadcast_message::BroadcastMessage;
use crate::message::outgoing::error_message::ErrorMessage;
use crate::message::outgoing::success_message::SuccessMessage;
use async_trait::async_trait;
use futures_util::{Sink, SinkExt};
use js_int::UInt;
use std::fmt::Debug;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

pub type MessageSender = Pin<Arc<dyn MessageSenderTrait + Send + Sync>>;

/// Sending half of a client connection.
///
/// Sending fails once the connection is closed. Callers are expected to ignore those failures.
#[async_trait]
pub trait MessageSenderTrait: Send + Sync {
	async fn send_success_message(&self, message: SuccessMessage, request_id: UInt) -> Result<(), ()>;
	async fn send_error_message(&self, message: ErrorMessage, request_id: Option<UInt>) -> Result<(), ()>;
	async fn send_broadcast_message(&self, message: BroadcastMessage) -> Result<(), ()>;
	async fn close(&self);
	fn is_closed(&self) -> bool;
}

pub struct SinkMessageSender<ResponseSink> {
	inner: tokio::sync::Mutex<SinkMessageSenderInner<ResponseSink>>,
	closed: AtomicBool,
}

struct SinkMessageSenderInner<ResponseSink> {
	response_sink: ResponseSink,
}

#[async_trait]
impl<ResponseSink, SinkError> MessageSenderTrait for SinkMessageSender<ResponseSink>
where
	ResponseSink: Sink<WebSocketMessage, Error = SinkError> + Send + Unpin + 'static,
	SinkError: Debug + 'static,
{
	async fn send_success_message(&self, message: SuccessMessage, request_id: UInt) -> Result<(), ()> {
		let outgoing_message = OutgoingMessage::Success { request_id, message };
		self.send_message(outgoing_message).await
	}

	async fn send_error_message(&self, message: ErrorMessage, request_id: Option<UInt>) -> Result<(), ()> {
		let outgoing_message = OutgoingMessage::Error { request_id, message };
		self.send_message(outgoing_message).await
	}

	async fn send_broadcast_message(&self, message: BroadcastMessage) -> Result<(), ()> {
		let outgoing_message = OutgoingMessage::Broadcast { message };
		self.send_message(outgoing_message).await
	}

	async fn close(&self) {
		if self.closed.swap(true, Ordering::SeqCst) {
			return;
		}

		let mut inner = self.inner.lock().await;
		let _ = inner.response_sink.send(WebSocketMessage::Close(None)).await;
	}

	fn is_closed(&self) -> bool {
		self.closed.load(Ordering::SeqCst)
	}
}

impl<ResponseSink, SinkError> SinkMessageSender<ResponseSink>
where
	ResponseSink: Sink<WebSocketMessage, Error = SinkError> + Unpin,
	SinkError: Debug + 'static,
{
	pub fn new(response_sink: ResponseSink) -> Self {
		let inner = SinkMessageSenderInner { response_sink };
		Self {
			inner: inner.into(),
			closed: AtomicBool::new(false),
		}
	}

	async fn send_message(&self, message: OutgoingMessage) -> Result<(), ()> {
		if self.closed.load(Ordering::SeqCst) {
			return Err(());
		}

		let websocket_message = WebSocketMessage::from(&message);

		let mut inner = self.inner.lock().await;
		inner.response_sink.send(websocket_message).await.map_err(|error| {
			self.closed.store(true, Ordering::SeqCst);
			debug!(?error, "Error while sending message, treating connection as closed");
		})
	}
}

impl<ResponseSink, SinkError> From<SinkMessageSender<ResponseSink>> for MessageSender
where
	ResponseSink: Sink<WebSocketMessage, Error = SinkError> + Send + Unpin + 'static,
	SinkError: Debug + 'static,
{
	fn from(sink_message_sender: SinkMessageSender<ResponseSink>) -> Self {
		Arc::pin(sink_message_sender)
	}
}
