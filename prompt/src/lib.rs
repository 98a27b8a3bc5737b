//! # Prompt
//!
//! Chat message value types shared by the client crates.
//!
//! A [`ChatMessage`] pairs a [`MessageRole`] with text content, one-to-one
//! with one element of the OpenAI `messages` array. Messages are plain
//! values built per call and dropped after the send. The demo flow only ever
//! constructs user messages; the other roles exist so conversions into SDK
//! types stay total.
//!
//! ## External interactions
//!
//! - **AI models**: messages are converted into API request messages by
//!   `llm-client` and sent to the chat completions endpoint.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message: what gets sent to the model.
///
/// Derives `PartialEq` so tests can compare captured messages against
/// expected fixtures directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Wraps text as a user (human) message. Content may be empty.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}
