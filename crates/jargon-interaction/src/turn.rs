//! Per-turn orchestration.
//!
//! The thin wrapper around one user submission: counter, one-time system
//! prompt, the model call, error substitution, truncation, history append.
//! There is no state machine beyond idle → awaiting-reply → idle and no
//! retry policy: a model-client failure is terminal for the turn and
//! surfaces immediately as the fixed error reply.

use jargon_core::formatter::{format_reply, REPLY_WORD_LIMIT};
use jargon_core::{ChatSettings, Session};

use crate::client::{ModelClient, SamplingOptions};

/// The fixed raw reply substituted when the model client fails.
///
/// Exactly four whitespace tokens, so the formatter passes it through
/// unchanged.
pub const MODEL_ERROR_REPLY: &str = "Error contacting model.";

/// Runs one chat turn: appends the user message, requests a completion, and
/// appends the formatted reply.
///
/// The call blocks the interaction until the model host answers or fails. A
/// failure is caught here, logged, and replaced by [`MODEL_ERROR_REPLY`];
/// the session continues either way. Returns the formatted reply that was
/// appended.
pub async fn run_turn<C: ModelClient>(
    session: &mut Session,
    settings: &ChatSettings,
    client: &C,
    user_input: &str,
) -> String {
    session.record_query();
    session.ensure_system_prompt(settings.mode);
    session.push_user(user_input);

    let options = SamplingOptions {
        temperature: settings.temperature(),
    };

    let raw_reply = match client.chat(settings.model, session.messages(), options).await {
        Ok(reply) => reply.content,
        Err(err) => {
            tracing::warn!(error = %err, model = %settings.model, "model call failed");
            MODEL_ERROR_REPLY.to_string()
        }
    };

    let formatted = format_reply(&raw_reply, REPLY_WORD_LIMIT);
    session.push_assistant(formatted.clone());
    formatted
}
