//! Errors raised when an event cannot be fired.

use thiserror::Error;

/// Errors that can occur when firing an event.
///
/// Both variants are contract violations: callers are expected to gate every
/// `fire` behind `can_fire`. They are kept apart so diagnostics can tell a
/// structurally impossible event from one whose data failed every guard.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("No transition registered for event '{event}' in state '{state}'")]
    NoSuchTransition { state: String, event: String },

    #[error("No applicable transition for event '{event}' in state '{state}': every guard set rejected the data")]
    NoApplicableTransition { state: String, event: String },
}
