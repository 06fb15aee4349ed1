use crate::message::WebSocketMessage;
use anyhow::bail;
use axum::extract::ws;
use bytes::Bytes;
use tokio_tungstenite::tungstenite;

/// Converts frames received by axum into the message type the connection layer works with.
pub fn axum_to_websocket_message(axum_message: ws::Message) -> WebSocketMessage {
	use ws::Message::*;

	match axum_message {
		Text(text) => WebSocketMessage::Text(axum_to_tungstenite_text(text)),
		Binary(data) => WebSocketMessage::Binary(data),
		Ping(data) => WebSocketMessage::Ping(data),
		Pong(data) => WebSocketMessage::Pong(data),
		Close(Some(ws::CloseFrame { code, reason })) => {
			WebSocketMessage::Close(Some(tungstenite::protocol::CloseFrame {
				code: code.into(),
				reason: axum_to_tungstenite_text(reason),
			}))
		}
		Close(None) => WebSocketMessage::Close(None),
	}
}

/// Converts outgoing messages into frames axum can send. Raw frames can't be represented.
pub fn websocket_message_to_axum(websocket_message: WebSocketMessage) -> anyhow::Result<ws::Message> {
	use tungstenite::Message::*;

	Ok(match websocket_message {
		Text(text) => ws::Message::Text(tungstenite_to_axum_text(text)),
		Binary(data) => ws::Message::Binary(data),
		Ping(data) => ws::Message::Ping(data),
		Pong(data) => ws::Message::Pong(data),
		Close(Some(tungstenite::protocol::CloseFrame { code, reason })) => ws::Message::Close(Some(ws::CloseFrame {
			code: code.into(),
			reason: tungstenite_to_axum_text(reason),
		})),
		Close(None) => ws::Message::Close(None),
		Frame(_frame) => bail!("Raw websocket frames can't be sent through axum"),
	})
}

fn axum_to_tungstenite_text(axum_text: ws::Utf8Bytes) -> tungstenite::Utf8Bytes {
	tungstenite::Utf8Bytes::try_from(Bytes::from(axum_text))
		.unwrap_or_else(|_| unreachable!("Converting from valid UTF-8 to UTF-8 can't fail"))
}

fn tungstenite_to_axum_text(tungstenite_text: tungstenite::Utf8Bytes) -> ws::Utf8Bytes {
	ws::Utf8Bytes::try_from(Bytes::from(tungstenite_text))
		.unwrap_or_else(|_| unreachable!("Converting from valid UTF-8 to UTF-8 can't fail"))
}
