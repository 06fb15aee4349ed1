pub mod broadcast_channel;
pub mod error;
pub mod session_id;
pub mod session_id_sequence;
pub mod session_manager;
