//! Text generation provider abstractions and implementations.
//!
//! The checker talks to the model through [`TextProvider`] so the Gemini
//! backend can be swapped for the scripted mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Prompt blocked: {0}")]
    PromptBlocked(String),

    #[error("Empty response: the model returned no text")]
    EmptyResponse,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a generation call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
    Error,
}

impl FinishReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Complete => "complete",
            FinishReason::Length => "length",
            FinishReason::ContentFilter => "content_filter",
            FinishReason::Error => "error",
        }
    }
}

/// Trait for single-turn text generation.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a reply for a single prompt. No conversation state is kept
    /// between calls.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Cheap check that the provider can be called at all.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
