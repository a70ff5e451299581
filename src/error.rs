//! Error types for the voice relay

use thiserror::Error;

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the voice relay
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Generative-text API error (transport, status, or response shape)
    #[error("generation error: {0}")]
    Generation(String),

    /// HTTP server error
    #[error("server error: {0}")]
    Server(String),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
