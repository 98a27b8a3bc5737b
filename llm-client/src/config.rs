//! LLM configuration: a plain value loaded once at the process boundary.

use anyhow::{Context, Result};
use std::env;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Sampling temperature sent with every request.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Configuration for an OpenAI-compatible chat endpoint.
///
/// Built explicitly or loaded from the environment via [`LlmConfig::from_env`];
/// after that it is passed around as a value, so nothing deeper in the call
/// chain touches the environment.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f32,
    pub api_key: String,
    /// `None` means the SDK's default base URL.
    pub base_url: Option<String>,
}

impl LlmConfig {
    /// Config with defaults: `gpt-4o`, temperature 0.7, default base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load from environment variables: `OPENAI_API_KEY` (required),
    /// `OPENAI_MODEL` (optional), `OPENAI_BASE_URL` (optional).
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("OPENAI_BASE_URL").ok();
        Ok(Self {
            model,
            temperature: DEFAULT_TEMPERATURE,
            api_key,
            base_url,
        })
    }
}
