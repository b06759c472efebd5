//! LLM provider abstraction for the AI endpoints.
//!
//! One primitive, `generate(prompt, schema?) -> text`, carries all three AI
//! contracts. Providers are stateless and thread-safe; the fake provider lets
//! the contracts be tested without a live network dependency.

mod claude;
mod fake;

pub use claude::ClaudeProvider;
pub use fake::FakeProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// When `schema` is supplied the provider constrains generation to valid JSON
/// matching it and returns that JSON as text; without one it returns
/// unconstrained text.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    async fn generate(
        &self,
        prompt: &str,
        schema: Option<&serde_json::Value>,
    ) -> Result<String, LlmError>;

    /// Provider name (e.g. "claude", "fake").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g. "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

/// Build the provider selected by the environment:
/// - AI_PROVIDER: "claude" | "fake" (default "fake")
/// - ANTHROPIC_API_KEY: API key, required for "claude"
/// - AI_MODEL: model name override
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("AI_PROVIDER").unwrap_or_else(|_| "fake".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "claude" => {
            let api_key = std::env::var("ANTHROPIC_API_KEY")
                .map_err(|_| LlmError::NotConfigured("ANTHROPIC_API_KEY not set".to_string()))?;
            let model = std::env::var("AI_MODEL")
                .unwrap_or_else(|_| "claude-3-5-sonnet-20241022".to_string());
            Ok(Box::new(ClaudeProvider::new(api_key, model)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
