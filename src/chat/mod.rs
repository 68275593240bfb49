pub mod client;
pub mod conversation;
mod name_capture;
mod session;

pub use client::{ChatClient, ChatEvent, ChatRequest};
pub use conversation::{intent_icon, Conversation, Message, Sender};
pub use name_capture::capture_name;
pub use session::generate_session_id;
