//! Voice relay - browser speech UI backed by a generative-text API
//!
//! The browser transcribes speech locally and posts the text to `/chat`;
//! the relay wraps it in a fixed prompt, asks the generative-text API for a
//! reply, and returns it for display and speech synthesis.

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod relay;

pub use config::Config;
pub use error::{Error, Result};
pub use llm::{GeminiClient, TextGenerator};
pub use relay::{ChatExchange, FAILURE_REPLY, NO_INPUT_REPLY, Relay, RelayOutcome};
