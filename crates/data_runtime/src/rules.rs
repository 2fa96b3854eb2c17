//! Match rules loaded from data/config/rules.toml.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MatchRules {
    /// Delay between a death and the automatic respawn.
    pub respawn_delay_ms: u64,
    /// Team score that ends the round.
    pub round_score_limit: u32,
    /// Delay between the win announcement and the score reset.
    pub score_reset_delay_ms: u64,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            respawn_delay_ms: 3000,
            round_score_limit: 10,
            score_reset_delay_ms: 4000,
        }
    }
}

impl MatchRules {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/rules.toml");
        let mut rules = if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            toml::from_str::<Self>(&txt).context("parse rules TOML")?
        } else {
            Self::default()
        };
        // Env overrides for quick tuning (optional)
        if let Ok(v) = std::env::var("RESPAWN_DELAY_MS")
            && let Ok(ms) = v.parse()
        {
            rules.respawn_delay_ms = ms;
        }
        if let Ok(v) = std::env::var("ROUND_SCORE_LIMIT")
            && let Ok(n) = v.parse()
        {
            rules.round_score_limit = n;
        }
        Ok(rules)
    }
}
