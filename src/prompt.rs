//! Instruction template wrapped around each spoken message

/// Build the generation prompt for one user utterance
///
/// The message is embedded verbatim; each prompt stands alone with no
/// conversation history.
#[must_use]
pub fn build_relay_prompt(user_message: &str) -> String {
    format!(
        r#"You are a helpful AI assistant. A user just said: "{user_message}"

Respond naturally and helpfully. Keep responses conversational and under 150 words
since this will be spoken aloud. Be friendly, informative, and engaging.

If they ask about connecting to a human or need complex help, let them know this
is a demo AI assistant and suggest they contact the appropriate service."#
    )
}
