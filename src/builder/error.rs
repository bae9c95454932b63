//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial memory not specified. Call .memory(memory) before .build()")]
    MissingMemory,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("State '{state}' is declared final but has an outgoing transition")]
    TransitionFromFinalState { state: String },
}
