//! # Assistant CLI library
//!
//! The chat flow behind the `assistant-cli` binary: wrap a prompt into a
//! single user message and send it through a [`LlmClient`]. Lives in the
//! library so tests can drive it with a mock client instead of the network.

use anyhow::Result;
use llm_client::LlmClient;
use prompt::ChatMessage;

pub mod logger;

/// The one exchange the demo runs.
pub const DEMO_PROMPT: &str = "Hello! Can you tell me a fun fact about artificial intelligence?";

/// Sends `prompt` as a single user message and returns the model's reply.
pub async fn ask(client: &dyn LlmClient, prompt: &str) -> Result<String> {
    let messages = vec![ChatMessage::user(prompt)];
    client.send_messages(messages).await
}
