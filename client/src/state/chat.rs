//! Chat widget conversation state.
//!
//! DESIGN
//! ======
//! Messages live only as long as the widget instance; nothing is persisted
//! or sent anywhere except the single query POST per user message.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use uuid::Uuid;

use crate::net::api::FetchError;

pub const GREETING: &str = "Hi! Ask me anything about education loans, admissions or visas.";
pub const FAILURE_MESSAGE: &str = "Sorry, I couldn't reach our assistant right now. Please try again or book a free call.";
pub const RATE_LIMITED_MESSAGE: &str = "You're sending messages a little fast. Give it a minute and try again.";
pub const UNAVAILABLE_MESSAGE: &str = "Our assistant is offline at the moment. Please book a free call instead.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), sender, text: text.into() }
    }
}

#[derive(Clone, Debug)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    /// A query is awaiting its answer; input is disabled meanwhile.
    pub pending: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { open: false, messages: vec![ChatMessage::new(Sender::Bot, GREETING)], pending: false }
    }
}

impl ChatState {
    /// Append a user message and mark the widget pending.
    ///
    /// Returns the trimmed query to send, or `None` for blank input or while
    /// another answer is still pending.
    pub fn submit(&mut self, draft: &str) -> Option<String> {
        let query = draft.trim();
        if query.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, query));
        self.pending = true;
        Some(query.to_owned())
    }

    /// Record the outcome of the pending query as a bot message.
    pub fn resolve(&mut self, outcome: Result<String, FetchError>) {
        let text = match outcome {
            Ok(answer) => answer,
            Err(err) => bot_copy_for_error(&err).to_owned(),
        };
        self.messages.push(ChatMessage::new(Sender::Bot, text));
        self.pending = false;
    }
}

/// Static copy shown in place of an answer.
pub fn bot_copy_for_error(err: &FetchError) -> &'static str {
    match err {
        FetchError::Status(429) => RATE_LIMITED_MESSAGE,
        FetchError::Status(503) | FetchError::Unavailable => UNAVAILABLE_MESSAGE,
        _ => FAILURE_MESSAGE,
    }
}
