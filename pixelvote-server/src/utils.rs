#[cfg(test)]
pub mod fake_message_sender;
#[cfg(test)]
pub mod test_client;
pub mod websocket_message_conversion;
