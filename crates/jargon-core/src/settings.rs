//! Chat settings.
//!
//! All knobs the front end exposes: model, mode, sampling temperature,
//! simulated typing delay, and the thinking-lines toggle. Values come from
//! UI controls (slash commands / CLI flags), not from files or environment,
//! so there is no config file layer. Numeric ranges are bounded and the
//! setters clamp rather than reject.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::mode::Mode;
use crate::model::ModelId;

/// Sampling temperature bounds ("chaos level" in the UI).
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=1.5;
/// Typing delay bounds per revealed character.
pub const TYPING_DELAY_RANGE: std::ops::RangeInclusive<Duration> =
    Duration::from_millis(1)..=Duration::from_millis(30);

const DEFAULT_TEMPERATURE: f32 = 0.4;
const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(8);

/// Settings for one chat front-end instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Which local model receives the requests.
    pub model: ModelId,
    /// Active jargon mode. Exactly one per request.
    pub mode: Mode,
    /// Sampling temperature, clamped to [`TEMPERATURE_RANGE`].
    temperature: f32,
    /// Cosmetic per-character reveal delay, clamped to [`TYPING_DELAY_RANGE`].
    typing_delay: Duration,
    /// Whether canned thinking lines are shown before the real call.
    pub show_thinking: bool,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            mode: Mode::default(),
            temperature: DEFAULT_TEMPERATURE,
            typing_delay: DEFAULT_TYPING_DELAY,
            show_thinking: true,
        }
    }
}

impl ChatSettings {
    /// Current sampling temperature.
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Sets the sampling temperature, clamping to the supported range.
    pub fn set_temperature(&mut self, temperature: f32) {
        self.temperature = temperature.clamp(*TEMPERATURE_RANGE.start(), *TEMPERATURE_RANGE.end());
    }

    /// Current typing delay.
    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }

    /// Sets the typing delay, clamping to the supported range.
    pub fn set_typing_delay(&mut self, delay: Duration) {
        self.typing_delay = delay.clamp(*TYPING_DELAY_RANGE.start(), *TYPING_DELAY_RANGE.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ChatSettings::default();
        assert_eq!(settings.model, ModelId::Gemma3);
        assert_eq!(settings.mode, Mode::Tactical);
        assert_eq!(settings.temperature(), 0.4);
        assert_eq!(settings.typing_delay(), Duration::from_millis(8));
        assert!(settings.show_thinking);
    }

    #[test]
    fn test_temperature_is_clamped() {
        let mut settings = ChatSettings::default();
        settings.set_temperature(9.0);
        assert_eq!(settings.temperature(), 1.5);
        settings.set_temperature(-1.0);
        assert_eq!(settings.temperature(), 0.0);
        settings.set_temperature(0.7);
        assert_eq!(settings.temperature(), 0.7);
    }

    #[test]
    fn test_typing_delay_is_clamped() {
        let mut settings = ChatSettings::default();
        settings.set_typing_delay(Duration::from_secs(5));
        assert_eq!(settings.typing_delay(), Duration::from_millis(30));
        settings.set_typing_delay(Duration::ZERO);
        assert_eq!(settings.typing_delay(), Duration::from_millis(1));
    }
}
