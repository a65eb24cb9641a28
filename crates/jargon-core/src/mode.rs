//! Jargon modes.
//!
//! A mode is a closed enumeration selecting which canned instruction text
//! augments the system prompt. Exactly one mode is active per request; the
//! mapping from mode to instruction lives in a single table here so the
//! option list and the prompt text cannot drift apart.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The fixed preamble shared by every mode.
const SYSTEM_PREAMBLE: &str = "You are FOOTBALL JARGON AI.\n\
Simulate deep football reasoning.\n\
Reply ONLY with EXACTLY four words.\n\
Use dense football jargon.\n\
No explanations.";

/// Football jargon mode selecting the system instruction flavor.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Formations, strategies, pressing schemes.
    #[default]
    Tactical,
    /// Historical facts and terminology.
    Historical,
    /// Statistical analytics jargon.
    Analytical,
    /// Player performance and metrics jargon.
    #[strum(to_string = "Player Stats", serialize = "player-stats", serialize = "playerstats")]
    PlayerStats,
}

impl Mode {
    /// The mode-specific instruction appended to the system prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Mode::Tactical => "Respond in football tactical jargon, formations, strategies.",
            Mode::Historical => "Respond using historical football facts and terminology.",
            Mode::Analytical => "Respond using statistical football analytics jargon.",
            Mode::PlayerStats => {
                "Respond using player performance and football metrics jargon."
            }
        }
    }

    /// Builds the full system prompt for this mode.
    pub fn system_prompt(&self) -> String {
        format!("{SYSTEM_PREAMBLE}\n{}", self.instruction())
    }
}
