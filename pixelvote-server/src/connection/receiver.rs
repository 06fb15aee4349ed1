use crate::connection::sender::MessageSender;
use crate::message::client_request::{ClientRequestWithId, RequestIdOnly};
use crate::message::outgoing::error_message::{ErrorMessage, ErrorMessageType};
use crate::message::{MessageError, WebSocketMessage};
use async_trait::async_trait;
use futures_util::{Stream, StreamExt};
use std::pin::Pin;
use tracing::{debug, warn};

pub type MessageReceiver = Pin<Box<dyn MessageReceiverTrait + Unpin + Send>>;

/// Malformed messages in a row after which the connection gets closed.
const MAXIMUM_RETRIES: usize = 10;

#[async_trait]
pub trait MessageReceiverTrait {
	/// Receive a message from the client or None if the connection has been closed.
	async fn receive(&mut self) -> Option<ClientRequestWithId>;
}

pub struct StreamMessageReceiver<RequestStream> {
	request_stream: RequestStream,
	message_sender: MessageSender,
}

#[async_trait]
impl<RequestStream> MessageReceiverTrait for StreamMessageReceiver<RequestStream>
where
	RequestStream: Stream<Item = WebSocketMessage> + Unpin + Send,
{
	async fn receive(&mut self) -> Option<ClientRequestWithId> {
		let mut retries = 0;
		while retries < MAXIMUM_RETRIES {
			let websocket_message = self.request_stream.next().await?;

			match &websocket_message {
				WebSocketMessage::Close(_) => {
					self.message_sender.close().await;
					return None;
				}
				WebSocketMessage::Ping(_) | WebSocketMessage::Pong(_) => continue,
				_ => {}
			}

			let message_error = match ClientRequestWithId::try_from(&websocket_message) {
				Ok(client_request) => return Some(client_request),
				Err(message_error) => message_error,
			};
			retries += 1;

			let request_id = RequestIdOnly::try_from(&websocket_message)
				.map(|request| request.request_id)
				.ok();
			let message = match message_error {
				MessageError::DeserializationFailed { error, json } => {
					format!("Failed to deserialize client message with error: {error}, message was: {json}")
				}
				MessageError::WrongMessageType(message) => {
					format!("Client request has incorrect message type. Message was: {message}")
				}
			};
			debug!(retries, "{}", message);
			let _ = self
				.message_sender
				.send_error_message(
					ErrorMessage::builder()
						.error(ErrorMessageType::InvalidFormat)
						.message(message)
						.build(),
					request_id,
				)
				.await;
		}

		warn!("Closing connection after {} malformed messages in a row", MAXIMUM_RETRIES);
		let _ = self
			.message_sender
			.send_error_message(
				ErrorMessage::builder()
					.error(ErrorMessageType::InvalidOperation)
					.message("Too many retries".to_string())
					.build(),
				None,
			)
			.await;
		self.message_sender.close().await;
		None
	}
}

impl<RequestStream> StreamMessageReceiver<RequestStream>
where
	RequestStream: Stream<Item = WebSocketMessage>,
{
	pub fn new(request_stream: RequestStream, message_sender: MessageSender) -> Self {
		Self {
			request_stream,
			message_sender,
		}
	}
}

impl<RequestStream> From<StreamMessageReceiver<RequestStream>> for MessageReceiver
where
	RequestStream: Stream<Item = WebSocketMessage> + Unpin + Send + 'static,
{
	fn from(stream_message_receiver: StreamMessageReceiver<RequestStream>) -> Self {
		Box::pin(stream_message_receiver)
	}
}
