//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::engine::{Fsm, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// Unlike [`Fsm::new`], `build` validates the table: it must be non-empty
/// and no transition may leave a state declared final.
pub struct FsmBuilder<S: State, E: Event, M, D> {
    initial: Option<S>,
    memory: Option<M>,
    transitions: Vec<Transition<S, E, M, D>>,
}

impl<S: State, E: Event, M, D> FsmBuilder<S, E, M, D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            memory: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the initial memory (required).
    pub fn memory(mut self, memory: M) -> Self {
        self.memory = Some(memory);
        self
    }

    /// Add a transition. Order of calls is registration order.
    pub fn transition(mut self, transition: Transition<S, E, M, D>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E, M, D>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or the table is malformed.
    pub fn build(self) -> Result<Fsm<S, E, M, D>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let memory = self.memory.ok_or(BuildError::MissingMemory)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if let Some(bad) = self.transitions.iter().find(|t| t.from.is_final()) {
            return Err(BuildError::TransitionFromFinalState {
                state: bad.from.name().to_string(),
            });
        }

        let mut machine = Fsm::new(initial, memory);
        for transition in self.transitions {
            machine.add_transition(transition);
        }

        Ok(machine)
    }
}

impl<S: State, E: Event, M, D> Default for FsmBuilder<S, E, M, D> {
    fn default() -> Self {
        Self::new()
    }
}
