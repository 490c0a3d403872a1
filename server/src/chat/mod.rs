//! Chat widget backend.
//!
//! DESIGN
//! ======
//! The site does not answer questions itself: `/api/chat` forwards the
//! visitor's query to an upstream answer service (`POST {query}` ->
//! `{answer}`) and relays the answer. [`ChatBackend`] is the seam so route
//! tests can use a canned backend. There is no retry; the widget turns any
//! failure into a static apology.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;

/// Longest query forwarded upstream, in characters.
pub const MAX_QUERY_CHARS: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("chat request failed: {0}")]
    Request(String),

    #[error("chat backend error: status {status}")]
    Status { status: u16, body: String },

    #[error("chat response parse failed: {0}")]
    Parse(String),

    #[error("chat backend returned an empty answer")]
    EmptyAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub answer: String,
}

#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Answer one visitor query.
    async fn ask(&self, query: &str) -> Result<String, ChatError>;
}

// =============================================================================
// HTTP BACKEND
// =============================================================================

pub struct HttpChatBackend {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpChatBackend {
    /// # Errors
    ///
    /// Returns [`ChatError::HttpClientBuild`] if reqwest cannot build the client.
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChatError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint.clone() })
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatBackend {
    async fn ask(&self, query: &str) -> Result<String, ChatError> {
        let body = ChatRequest { query: query.to_owned() };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ChatError::Status { status, body: text });
        }

        parse_reply(&text)
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Trim and cap a visitor query; `None` when nothing is left.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_QUERY_CHARS).collect())
}

fn parse_reply(json: &str) -> Result<String, ChatError> {
    let reply: ChatReply = serde_json::from_str(json).map_err(|e| ChatError::Parse(e.to_string()))?;
    let answer = reply.answer.trim();
    if answer.is_empty() {
        return Err(ChatError::EmptyAnswer);
    }
    Ok(answer.to_owned())
}
