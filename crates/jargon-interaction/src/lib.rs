//! Model-host integration and per-turn orchestration.
//!
//! This crate owns the boundary to the external model host: the
//! [`ModelClient`] trait, its Ollama implementation, and the thin wrapper
//! that runs one chat turn against a session.

pub mod client;
pub mod ollama;
pub mod turn;

pub use client::{ModelClient, SamplingOptions};
pub use ollama::OllamaClient;
pub use turn::{run_turn, MODEL_ERROR_REPLY};
