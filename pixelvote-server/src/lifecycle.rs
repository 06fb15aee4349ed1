use crate::chat::error::ValidationError;
use crate::chat::model::RoomId;
use crate::chat::post_message;
use crate::connection::receiver::MessageReceiver;
use crate::connection::sender::MessageSender;
use crate::context::ApplicationContext;
use crate::message::client_request::{ClientRequest, JoinRequest, SendRequest, SetNameRequest};
use crate::message::outgoing::error_message::{ErrorMessage, ErrorMessageType};
use crate::message::outgoing::success_message::SuccessMessage;
use crate::room::session_id::SessionId;
use governor::{Quota, RateLimiter};
use nonzero_ext::nonzero;
use tracing::{debug, info, warn};

pub async fn run_client(
	application_context: ApplicationContext,
	message_sender: MessageSender,
	message_receiver: MessageReceiver,
) {
	let session_manager = application_context.session_manager.clone();
	let session_id = session_manager.open(message_sender.clone());
	info!(session_id = %session_id, "Client connected");

	handle_messages(&application_context, session_id, &message_sender, message_receiver).await;

	session_manager.leave_all(session_id);
	message_sender.close().await;
	info!(session_id = %session_id, "Client disconnected");
}

const QUOTA: Quota = Quota::per_second(nonzero!(1u32)).allow_burst(nonzero!(10u32));

async fn handle_messages(
	application_context: &ApplicationContext,
	session_id: SessionId,
	message_sender: &MessageSender,
	mut message_receiver: MessageReceiver,
) {
	let rate_limiter = RateLimiter::direct(QUOTA);
	while let Some(message) = message_receiver.receive().await {
		rate_limiter.until_ready().await;

		debug!(
			session_id = %session_id,
			request_id = %message.request_id,
			"Received {} request",
			message.request.kind(),
		);

		// A failed send means the client is gone, the receiver notices that on its own.
		let _ = match handle_request(application_context, session_id, message.request).await {
			Ok(success_message) => {
				message_sender
					.send_success_message(success_message, message.request_id)
					.await
			}
			Err(error_message) => {
				message_sender
					.send_error_message(error_message, Some(message.request_id))
					.await
			}
		};
	}
}

async fn handle_request(
	application_context: &ApplicationContext,
	session_id: SessionId,
	request: ClientRequest,
) -> Result<SuccessMessage, ErrorMessage> {
	use ClientRequest::*;
	match request {
		Join(join_request) => handle_join_request(application_context, session_id, join_request).await,
		SetName(set_name_request) => handle_set_name_request(application_context, session_id, &set_name_request),
		Send(send_request) => handle_send_request(application_context, session_id, send_request).await,
	}
}

async fn handle_join_request(
	application_context: &ApplicationContext,
	session_id: SessionId,
	join_request: JoinRequest,
) -> Result<SuccessMessage, ErrorMessage> {
	let room_id = RoomId::new(join_request.room_id()?.unwrap_or_default())?;

	// subscribe first so that no message between loading the history and joining gets lost
	application_context.session_manager.join(session_id, room_id.clone())?;

	let history_limit = application_context.configuration.history_limit;
	match application_context.store.messages().recent(&room_id, history_limit).await {
		Ok(messages) => Ok(SuccessMessage::History {
			room_id,
			messages: messages.into_iter().map(Into::into).collect(),
		}),
		Err(error) => {
			warn!(session_id = %session_id, room_id = %room_id, %error, "Failed to load chat history");
			Err(ErrorMessage::builder()
				.error(ErrorMessageType::HistoryUnavailable)
				.message("Chat history is currently unavailable.".to_string())
				.build())
		}
	}
}

fn handle_set_name_request(
	application_context: &ApplicationContext,
	session_id: SessionId,
	set_name_request: &SetNameRequest,
) -> Result<SuccessMessage, ErrorMessage> {
	let name = set_name_request.name()?;
	let display_name = application_context.session_manager.set_display_name(session_id, name)?;
	debug!(session_id = %session_id, name = %display_name, "Changed display name");

	Ok(SuccessMessage::Success)
}

async fn handle_send_request(
	application_context: &ApplicationContext,
	session_id: SessionId,
	send_request: SendRequest,
) -> Result<SuccessMessage, ErrorMessage> {
	let room_id = RoomId::new(send_request.room_id()?.unwrap_or_default())?;
	let text = send_request.text()?;

	let session_manager = &application_context.session_manager;
	if session_manager.current_room(session_id).as_ref() != Some(&room_id) {
		return Err(ValidationError::NotJoined.into());
	}
	let author = session_manager.author(session_id)?;

	let message = post_message(
		application_context.store.messages(),
		session_manager.broadcast_channel(),
		&room_id,
		&author,
		text,
	)
	.await
	.inspect_err(|error| debug!(session_id = %session_id, room_id = %room_id, %error, "Rejected chat message"))?;

	Ok(SuccessMessage::Sent {
		message_id: message.uuid,
	})
}
