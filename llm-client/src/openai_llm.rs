//! OpenAI implementation of [`LlmClient`]: converts messages and delegates to openai-client.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::instrument;

use super::{chat_message_to_openai, LlmClient, LlmConfig};

/// [`LlmClient`] backed by [`openai_client::OpenAIClient`].
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    temperature: f32,
}

impl OpenAILlmClient {
    /// Builds the client from a loaded [`LlmConfig`].
    pub fn new(config: LlmConfig) -> Self {
        let LlmConfig {
            model,
            temperature,
            api_key,
            base_url,
        } = config;
        let client = match base_url {
            Some(base_url) => openai_client::OpenAIClient::with_base_url(api_key, base_url),
            None => openai_client::OpenAIClient::new(api_key),
        };
        Self {
            client,
            model,
            temperature,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages))]
    async fn send_messages(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let mut openai_messages = Vec::with_capacity(messages.len());
        for msg in &messages {
            openai_messages.push(chat_message_to_openai(msg)?);
        }
        self.client
            .chat_completion(&self.model, self.temperature, openai_messages)
            .await
    }
}
