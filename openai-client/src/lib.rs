//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for one-shot chat completion: send a
//! message list and get the first choice's text back. Exposes [`mask_token`]
//! so API keys can appear in logs without leaking.
//!
//! One request, one awaited response; no retries and no streaming.

use async_openai::{types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;
use tracing;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Masks an API key/token for safe logging: first 7 chars + `***` + last 4.
/// Keys of 11 chars or fewer come back as `***` so no segment of a short key
/// is ever shown. Length and cut points count chars, not bytes, so multi-byte
/// keys mask instead of hitting a slice boundary.
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = token.chars().take(7).collect();
        let tail: String = token.chars().skip(len - 4).collect();
        format!("{}***{}", head, tail)
    }
}

/// OpenAI chat client. Wraps the async-openai client; optionally keeps the
/// API key so request logs can show it masked.
#[derive(Clone)]
pub struct OpenAIClient {
    /// Shared async-openai client used for all API calls.
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    /// Stored only for masked logging. None when built via `with_client()`.
    api_key_for_logging: Option<String>,
}

impl OpenAIClient {
    /// Builds a client using the given API key and the default API base URL.
    pub fn new(api_key: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(config);
        Self {
            client: Arc::new(client),
            api_key_for_logging,
        }
    }

    /// Builds a client with a custom base URL (e.g. for proxies, compatible
    /// endpoints, or the mock server in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        let client = Client::with_config(config);
        Self {
            client: Arc::new(client),
            api_key_for_logging,
        }
    }

    /// Wraps an existing async-openai client (no API key kept for logging).
    pub fn with_client(client: Client<async_openai::config::OpenAIConfig>) -> Self {
        Self {
            client: Arc::new(client),
            api_key_for_logging: None,
        }
    }

    /// Sends one chat completion request and returns the first choice's
    /// content.
    ///
    /// A response with no choices is an error; a first choice whose content
    /// is null comes back as the empty string. Transport and API errors
    /// propagate to the caller untouched.
    pub async fn chat_completion(
        &self,
        model: &str,
        temperature: f32,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> anyhow::Result<String> {
        let message_count = messages.len();
        let masked = self
            .api_key_for_logging
            .as_deref()
            .map(mask_token)
            .unwrap_or_else(|| "***".to_string());

        tracing::info!(
            model = %model,
            temperature = temperature,
            message_count = message_count,
            api_key = %masked,
            "chat completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .temperature(temperature)
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "chat completion request body");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat completion usage"
            );
        }

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("no choices in chat completion response")
        }
    }
}
