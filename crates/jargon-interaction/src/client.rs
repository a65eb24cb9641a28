//! The external model-client collaborator boundary.

use async_trait::async_trait;

use jargon_core::{Message, ModelId, Result};

/// Sampling parameters forwarded to the model host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingOptions {
    /// Sampling temperature.
    pub temperature: f32,
}

/// Sends a message sequence to a model host and returns its reply.
///
/// The host is opaque to the rest of the program: it either returns a reply
/// message or fails with a [`jargon_core::JargonError::ModelClient`] error.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Requests a completion for the given message sequence.
    async fn chat(
        &self,
        model: ModelId,
        messages: &[Message],
        options: SamplingOptions,
    ) -> Result<Message>;
}
