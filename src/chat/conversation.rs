use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::chat::client::ChatRequest;
use crate::constants::{FALLBACK_TEXT, GREETING_TEXT, HANDOFF_TEXT};

/// Side of the conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A suggested follow-up action attached to an assistant reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionHint {
    pub action: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// A single message in the thread. Immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
    pub intent: Option<String>,
    pub entities: Option<Map<String, Value>>,
    pub actions: Option<Vec<ActionHint>>,
    pub escalation_needed: Option<bool>,
}

impl Message {
    pub fn user(text: &str) -> Self {
        Self {
            sender: Sender::User,
            text: text.to_string(),
            timestamp: Local::now(),
            intent: None,
            entities: None,
            actions: None,
            escalation_needed: None,
        }
    }

    pub fn assistant(text: &str) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.to_string(),
            timestamp: Local::now(),
            intent: None,
            entities: None,
            actions: None,
            escalation_needed: None,
        }
    }

    /// The opening WAXBOT greeting.
    pub fn greeting() -> Self {
        let mut m = Self::assistant(GREETING_TEXT);
        m.intent = Some("casual_chat".to_string());
        m
    }

    /// Shown in place of a reply when the request fails.
    pub fn fallback() -> Self {
        let mut m = Self::assistant(FALLBACK_TEXT);
        m.escalation_needed = Some(true);
        m
    }

    /// Appended when the user accepts the escalation offer.
    pub fn handoff() -> Self {
        let mut m = Self::assistant(HANDOFF_TEXT);
        m.intent = Some("escalation".to_string());
        m
    }
}

/// Icon shown next to an assistant message, keyed by its intent tag.
pub fn intent_icon(intent: Option<&str>) -> &'static str {
    match intent {
        Some("booking") => "📅",
        Some("product_inquiry") => "🛍️",
        Some("service_details") => "💰",
        Some("order_status") => "📦",
        Some("complaint") => "⚠️",
        Some("aftercare") => "🧴",
        Some("casual_chat") => "👋",
        Some("escalation") => "🆘",
        _ => "🤖",
    }
}

/// The conversation thread plus the session context sent with every request.
///
/// The message list is strictly append-only: messages are never reordered,
/// edited, or removed for the lifetime of the session.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    pub session_id: String,
    pub user_name: Option<String>,
}

impl Conversation {
    pub fn new(session_id: String) -> Self {
        Self {
            messages: Vec::new(),
            session_id,
            user_name: None,
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of assistant-side messages in the thread.
    pub fn assistant_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::Assistant)
            .count()
    }

    /// Text of the most recent user message, if any.
    pub fn last_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.sender == Sender::User)
            .map(|m| m.text.as_str())
    }

    /// Builds the outgoing request for `text`, carrying whatever session
    /// context the conversation has accumulated so far.
    pub fn request_for(&self, text: String) -> ChatRequest {
        ChatRequest {
            message: text,
            session_id: Some(self.session_id.clone()),
            user_name: self.user_name.clone(),
        }
    }
}
