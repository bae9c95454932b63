//! Configurable bidding limits.

use crate::auction::error::AuctionError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest opening bid.
pub const DEFAULT_MIN_BET: u32 = 8;
/// Smallest bid that may be declared capo.
pub const DEFAULT_MIN_CAPO_BET: u32 = 25;
/// How long the bidding team may answer a contra with a recontra.
pub const DEFAULT_CONTRA_WINDOW_SECS: u64 = 10;

/// Limits the bidding chart's guards are built from.
///
/// Missing fields fall back to the defaults when loading from JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionRules {
    pub min_bet: u32,
    pub min_capo_bet: u32,
    pub contra_window_secs: u64,
}

impl Default for AuctionRules {
    fn default() -> Self {
        Self {
            min_bet: DEFAULT_MIN_BET,
            min_capo_bet: DEFAULT_MIN_CAPO_BET,
            contra_window_secs: DEFAULT_CONTRA_WINDOW_SECS,
        }
    }
}

impl AuctionRules {
    /// Parse and validate rules from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, AuctionError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), AuctionError> {
        if self.min_bet == 0 {
            return Err(AuctionError::InvalidRules(
                "min_bet must be at least 1".to_string(),
            ));
        }
        if self.min_capo_bet < self.min_bet {
            return Err(AuctionError::InvalidRules(format!(
                "min_capo_bet ({}) must not be below min_bet ({})",
                self.min_capo_bet, self.min_bet
            )));
        }
        if self.contra_window_secs == 0 {
            return Err(AuctionError::InvalidRules(
                "contra_window_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Response window the host timer should arm when a contra is declared.
    pub fn contra_window(&self) -> Duration {
        Duration::from_secs(self.contra_window_secs)
    }
}
