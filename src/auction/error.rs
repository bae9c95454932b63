//! Auction error types.

use crate::builder::BuildError;
use crate::engine::FsmError;
use thiserror::Error;

/// Errors surfaced by the bidding protocol.
#[derive(Debug, Error)]
pub enum AuctionError {
    /// The intent was not legal in the current state; the caller skipped
    /// the paired `can_*` check or lost a race for the table.
    #[error(transparent)]
    Transition(#[from] FsmError),

    /// A selection value that names no known player, suit, or option
    #[error("Illegal {kind} value: '{value}'")]
    IllegalValue { kind: &'static str, value: String },

    #[error("Invalid auction rules: {0}")]
    InvalidRules(String),

    #[error("Failed to parse auction rules: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Bidding chart is malformed: {0}")]
    Build(#[from] BuildError),
}
