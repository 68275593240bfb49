use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::chat::conversation::{ActionHint, Message};
use crate::constants::CHAT_PATH;

/// Request body for `POST /chat`.
///
/// Optional fields are omitted from the JSON entirely when absent, never
/// sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// A product offer attached to an assistant reply. Display-only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub name: String,
    pub features: String,
    pub benefits: String,
    pub image_url: String,
    pub product_link: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Structured reply from the assistant endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub entities: Option<Map<String, Value>>,
    #[serde(default)]
    pub actions: Option<Vec<ActionHint>>,
    #[serde(default)]
    pub escalation_needed: Option<bool>,
    #[serde(default)]
    pub product: Option<Product>,
}

impl ChatReply {
    /// Build the assistant thread message carrying this reply's metadata.
    /// The product, if any, is display state and stays out of the thread.
    pub fn to_message(&self) -> Message {
        let mut m = Message::assistant(&self.message);
        m.intent = self.intent.clone();
        m.entities = self.entities.clone();
        m.actions = self.actions.clone();
        m.escalation_needed = self.escalation_needed;
        m
    }
}

/// Why a chat request failed. The caller collapses every variant into the
/// same fallback path; the detail string only reaches the diagnostic log.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("could not reach the assistant endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("assistant endpoint returned {0}")]
    Status(StatusCode),
}

/// Events sent from the request task back to the main loop.
#[derive(Debug)]
pub enum ChatEvent {
    /// The endpoint answered with a structured reply.
    Reply(ChatReply),
    /// The request failed (network error, bad status, or undecodable body).
    Failed(String),
}

/// Async client for the assistant's chat endpoint.
///
/// No explicit timeout is configured; the transport default applies. The
/// single in-flight request is serialized by the UI's loading flag, not
/// by this client.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the request and report the outcome over `tx`.
    ///
    /// Every failure mode collapses into one `Failed` event; no retry.
    pub async fn send_chat(&self, request: ChatRequest, tx: mpsc::UnboundedSender<ChatEvent>) {
        match self.request_reply(&request).await {
            Ok(reply) => {
                let _ = tx.send(ChatEvent::Reply(reply));
            }
            Err(e) => {
                let _ = tx.send(ChatEvent::Failed(e.to_string()));
            }
        }
    }

    async fn request_reply(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        let url = format!("{}{}", self.base_url, CHAT_PATH);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(ChatError::Status(response.status()));
        }

        Ok(response.json::<ChatReply>().await?)
    }
}
