use crate::connection::receiver::{MessageReceiver, StreamMessageReceiver};
use crate::connection::sender::{MessageSender, SinkMessageSender};
use crate::context::ApplicationContext;
use crate::lifecycle::run_client;
use crate::utils::websocket_message_conversion::{axum_to_websocket_message, websocket_message_to_axum};
use axum::Router;
use axum::extract::State;
use axum::extract::ws::{WebSocket, WebSocketUpgrade};
use axum::response::Response;
use axum::routing::get;
use futures_util::{SinkExt, StreamExt};
use std::future::ready;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

pub mod rest_api;

const MAXIMUM_MESSAGE_SIZE: usize = 10 * 1024;

pub async fn run_server(application_context: ApplicationContext) -> Result<(), std::io::Error> {
	let listener = TcpListener::bind(application_context.configuration.address).await?;
	info!(
		"Listening on {address}. Start websocket connections at 'ws://{address}/ws'.",
		address = listener.local_addr()?
	);

	axum::serve(listener, create_router(application_context))
		.with_graceful_shutdown(shutdown_signal())
		.await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	Router::new()
		.route("/ws", get(websocket_handler))
		.nest("/api", rest_api::rest_api())
		.with_state(application_context)
}

async fn websocket_handler(
	State(application_context): State<ApplicationContext>,
	websocket_upgrade: WebSocketUpgrade,
) -> Response {
	websocket_upgrade
		.max_message_size(MAXIMUM_MESSAGE_SIZE)
		.max_frame_size(MAXIMUM_MESSAGE_SIZE)
		.on_upgrade(move |websocket| {
			let (message_sender, message_receiver) = split_websocket(websocket);
			run_client(application_context, message_sender, message_receiver)
		})
}

fn split_websocket(websocket: WebSocket) -> (MessageSender, MessageReceiver) {
	let (sink, stream) = websocket.split();

	let sink = sink.with(|message| ready(websocket_message_to_axum(message)));
	let message_sender = MessageSender::from(SinkMessageSender::new(sink));

	let stream = stream
		.take_while(|result| {
			if let Err(error) = result {
				debug!(%error, "Websocket connection failed");
			}
			ready(result.is_ok())
		})
		.filter_map(|result| ready(result.ok().map(axum_to_websocket_message)));
	let message_receiver = MessageReceiver::from(StreamMessageReceiver::new(stream, message_sender.clone()));

	(message_sender, message_receiver)
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		error!(%error, "Failed to listen for Ctrl+C, graceful shutdown is unavailable");
		std::future::pending::<()>().await;
	}
	info!("Received Ctrl+C, shutting down");
}
