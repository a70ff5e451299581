//! Generative-text API clients
//!
//! The relay depends only on [`TextGenerator`], so a different provider or a
//! test double can stand in for Gemini.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::Result;

/// A provider that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`
    ///
    /// # Errors
    ///
    /// Returns error if the provider cannot be reached or returns no usable text
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier, for logging
    fn model(&self) -> &str;
}
