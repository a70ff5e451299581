//! Configuration management for the voice relay
//!
//! Precedence is CLI/environment, then the TOML file, then defaults.

pub mod file;

use std::path::PathBuf;

use secrecy::SecretString;

use crate::{Error, Result};

pub use file::RelayConfigFile;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

/// Default generative model
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Default generative-text API base URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Voice relay configuration, built once at startup
#[derive(Debug)]
pub struct Config {
    /// Listener configuration
    pub server: ServerConfig,

    /// Generative-text API configuration
    pub llm: LlmConfig,
}

/// Listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Verbose request logging
    pub debug: bool,
}

impl ServerConfig {
    /// Socket address string for the listener
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Generative-text API configuration
#[derive(Debug)]
pub struct LlmConfig {
    /// API key, never logged
    pub api_key: SecretString,

    /// Model identifier
    pub model: String,

    /// API base URL
    pub api_base: String,
}

/// Values supplied on the command line (or their env-backed clap args)
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: bool,
    /// Explicit config file path, replacing the standard location
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment and config file
    ///
    /// # Errors
    ///
    /// Returns error if no API key is configured
    pub fn load(overrides: &ServerOverrides) -> Result<Self> {
        let fc = overrides
            .config_path
            .as_deref()
            .map_or_else(file::load_config_file, file::load_config_file_at);

        Self::from_sources(fc, overrides, |key| std::env::var(key).ok())
    }

    /// Merge configuration sources
    ///
    /// `env` looks up an environment variable by name.
    ///
    /// # Errors
    ///
    /// Returns error if no API key is configured
    pub fn from_sources(
        fc: RelayConfigFile,
        overrides: &ServerOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let server = ServerConfig {
            host: overrides
                .host
                .clone()
                .or(fc.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(fc.server.port).unwrap_or(DEFAULT_PORT),
            debug: overrides.debug || fc.server.debug.unwrap_or(false),
        };

        let api_key = non_empty("GEMINI_API_KEY")
            .or_else(|| non_empty("GOOGLE_API_KEY"))
            .or(fc.llm.api_key.filter(|k| !k.trim().is_empty()))
            .ok_or_else(|| {
                Error::Config(
                    "no API key configured (set GEMINI_API_KEY or llm.api_key in config.toml)"
                        .to_string(),
                )
            })?;

        let llm = LlmConfig {
            api_key: SecretString::from(api_key),
            model: non_empty("VOICE_RELAY_MODEL")
                .or(fc.llm.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty("VOICE_RELAY_API_BASE")
                .or(fc.llm.api_base)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        };

        Ok(Self { server, llm })
    }
}
