//! Supported local model identifiers.
//!
//! The selectable model list is closed: these are the Ollama tags the front
//! end offers, not free-form strings. Adding a model means adding a variant
//! here and nowhere else.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Identifier of a locally hosted Ollama model.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ModelId {
    /// `gemma3:latest` (default)
    #[default]
    #[strum(to_string = "gemma3:latest", serialize = "gemma3")]
    Gemma3,
    /// `llama3:8b`
    #[strum(to_string = "llama3:8b", serialize = "llama3")]
    Llama3,
    /// `mixtral:8x7b`
    #[strum(to_string = "mixtral:8x7b", serialize = "mixtral")]
    Mixtral,
}

impl ModelId {
    /// The Ollama model tag sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gemma3 => "gemma3:latest",
            ModelId::Llama3 => "llama3:8b",
            ModelId::Mixtral => "mixtral:8x7b",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_matches_wire_tag() {
        for model in ModelId::iter() {
            assert_eq!(model.to_string(), model.as_str());
        }
    }

    #[test]
    fn test_parse_accepts_tag_and_short_name() {
        assert_eq!("gemma3:latest".parse::<ModelId>().unwrap(), ModelId::Gemma3);
        assert_eq!("llama3".parse::<ModelId>().unwrap(), ModelId::Llama3);
        assert_eq!("mixtral:8x7b".parse::<ModelId>().unwrap(), ModelId::Mixtral);
        assert!("gpt-4".parse::<ModelId>().is_err());
    }
}
