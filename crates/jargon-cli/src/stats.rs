//! Simulated football stats.
//!
//! The dashboard and match panels show made-up numbers: the point is
//! flavor, not measurement. Only the query counter, uptime, and chaos
//! energy are real session values.

use rand::Rng;

use jargon_core::{ChatSettings, Session};

/// Top-of-screen dashboard values.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Simulated, 10..=99.
    pub match_focus: u32,
    pub total_queries: u64,
    pub uptime_secs: i64,
    /// Temperature scaled to a percentage.
    pub chaos_energy: u32,
}

impl Dashboard {
    pub fn capture(session: &Session, settings: &ChatSettings) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            match_focus: rng.gen_range(10..=99),
            total_queries: session.query_count(),
            uptime_secs: session.uptime_secs(),
            chaos_energy: (settings.temperature() * 100.0) as u32,
        }
    }
}

/// Post-reply simulated match stats.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStats {
    pub goals_scored: u32,
    pub penalties: u32,
    pub free_kicks: u32,
    pub trophies: u32,
    pub player_rating: f64,
}

impl MatchStats {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            goals_scored: rng.gen_range(0..=5),
            penalties: rng.gen_range(0..=2),
            free_kicks: rng.gen_range(0..=3),
            trophies: rng.gen_range(0..=10),
            player_rating: (rng.gen_range(5.0..10.0_f64) * 10.0).round() / 10.0,
        }
    }
}
