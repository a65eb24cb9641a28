//! Session domain model.
//!
//! A session owns the ordered message sequence, a query counter, and the
//! session start timestamp. It is an explicit object passed through the
//! request-handling path; there is no ambient shared state and no durable
//! storage. Reset discards everything in memory, with no confirmation and
//! no undo.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::message::{Message, Role};
use crate::mode::Mode;

/// In-memory chat session state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Ordered message history: at most one system message, logically before
    /// the first user turn, then user/assistant turns. Append-only until
    /// reset.
    messages: Vec<Message>,
    /// Number of user submissions handled so far.
    query_count: u64,
    /// When this session (or its latest reset) began.
    started_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session starting now.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            query_count: 0,
            started_at: Utc::now(),
        }
    }

    /// The full ordered message sequence.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of user submissions handled so far.
    pub fn query_count(&self) -> u64 {
        self.query_count
    }

    /// When this session began.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds elapsed since the session began.
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    /// Increments the query counter and returns the new value.
    pub fn record_query(&mut self) -> u64 {
        self.query_count += 1;
        self.query_count
    }

    /// Inserts the mode-specific system message if none exists yet.
    ///
    /// The system message is inserted at most once per session, at the front
    /// of the sequence. A later mode change does not replace an already
    /// inserted instruction.
    pub fn ensure_system_prompt(&mut self, mode: Mode) {
        if !self.messages.iter().any(|m| m.role == Role::System) {
            self.messages.insert(0, Message::system(mode.system_prompt()));
        }
    }

    /// Appends a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Appends an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Clears all session state: messages, counter, start timestamp.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.query_count = 0;
        self.started_at = Utc::now();
    }

    /// Serializes the message sequence to an indented JSON document.
    ///
    /// The output is an array of `{role, content}` objects in history order,
    /// suitable for offering as a downloadable artifact. No schema version.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }
}
