//! Chatbot relay: one JSON request per user message.
//!
//! Client-side (hydrate): `POST` via `gloo-net` to the endpoint baked in at
//! build time through `PORTFOLIO_CHAT_ENDPOINT`. Server-side (SSR): a stub
//! error, since the widget only talks to the endpoint from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `ChatError` so the widget can show them inline
//! instead of tearing down the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";

/// Wire schema shared with the server's `/api/chat` handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("chat service unreachable: {0}")]
    Network(String),
    #[error("chat request failed: {0}")]
    Status(u16),
    #[error("chat reply unreadable: {0}")]
    Decode(String),
    #[error("chat is only available in the browser")]
    Unavailable,
}

/// Endpoint the widget posts to.
pub fn chat_endpoint() -> &'static str {
    option_env!("PORTFOLIO_CHAT_ENDPOINT")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_CHAT_ENDPOINT)
}

/// Empty replies are treated as a decode failure.
#[cfg(any(test, feature = "hydrate"))]
fn accept_reply(reply: ChatReply) -> Result<String, ChatError> {
    let text = reply.reply.trim();
    if text.is_empty() {
        return Err(ChatError::Decode("empty reply".to_owned()));
    }
    Ok(text.to_owned())
}

/// Send `message` to the chat endpoint and return the reply text.
///
/// # Errors
///
/// Returns a `ChatError` on transport failure, non-2xx status, or a body
/// that does not decode into a non-empty reply.
pub async fn send_message(message: &str) -> Result<String, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ChatRequest { message: message.to_owned() };
        let resp = gloo_net::http::Request::post(chat_endpoint())
            .json(&body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::Status(resp.status()));
        }
        let reply = resp
            .json::<ChatReply>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))?;
        accept_reply(reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(ChatError::Unavailable)
    }
}
