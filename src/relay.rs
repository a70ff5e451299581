//! The chat relay: one spoken message in, one reply out

use std::sync::Arc;

use crate::Error;
use crate::llm::TextGenerator;
use crate::prompt::build_relay_prompt;

/// Reply sent when the browser delivered no transcript
pub const NO_INPUT_REPLY: &str = "I didn't hear anything. Please try again.";

/// Reply sent when the generative-text API could not produce an answer
pub const FAILURE_REPLY: &str =
    "I apologize, but I'm having trouble processing your request right now. Please try again.";

/// How a single relay attempt ended
#[derive(Debug)]
pub enum RelayOutcome {
    /// The API produced a non-empty, trimmed reply
    Replied(String),
    /// Empty message; the API was not called
    NoInput,
    /// The API call failed for any reason
    Failed(Error),
}

impl RelayOutcome {
    /// The text shown and spoken to the user
    #[must_use]
    pub fn reply_text(&self) -> &str {
        match self {
            Self::Replied(text) => text,
            Self::NoInput => NO_INPUT_REPLY,
            Self::Failed(_) => FAILURE_REPLY,
        }
    }

    /// Consume the outcome into the user-visible reply
    #[must_use]
    pub fn into_reply(self) -> String {
        match self {
            Self::Replied(text) => text,
            other => other.reply_text().to_string(),
        }
    }
}

/// One request's message and its reply; never stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    pub user_message: String,
    pub ai_reply: String,
}

/// Stateless relay between the browser and a [`TextGenerator`]
#[derive(Clone)]
pub struct Relay {
    generator: Arc<dyn TextGenerator>,
}

impl Relay {
    /// Create a relay over the given generator
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Model identifier of the underlying generator
    #[must_use]
    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Classify one message without logging
    pub async fn classify(&self, message: &str) -> RelayOutcome {
        if message.is_empty() {
            return RelayOutcome::NoInput;
        }

        let prompt = build_relay_prompt(message);
        match self.generator.generate(&prompt).await {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    RelayOutcome::Failed(Error::Generation("empty reply".to_string()))
                } else {
                    RelayOutcome::Replied(trimmed.to_string())
                }
            }
            Err(e) => RelayOutcome::Failed(e),
        }
    }

    /// Relay one message, logging failures, and build the exchange
    pub async fn exchange(&self, message: &str) -> ChatExchange {
        let outcome = self.classify(message).await;

        match &outcome {
            RelayOutcome::Replied(text) => {
                tracing::debug!(
                    model = self.model(),
                    message_chars = message.chars().count(),
                    reply_chars = text.chars().count(),
                    "relayed message"
                );
            }
            RelayOutcome::NoInput => tracing::debug!("empty message, skipping generation"),
            RelayOutcome::Failed(e) => {
                tracing::error!(model = self.model(), error = %e, "generation failed, sending fallback reply");
            }
        }

        ChatExchange {
            user_message: message.to_string(),
            ai_reply: outcome.into_reply(),
        }
    }
}
