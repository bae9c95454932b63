//! Declarative transition records.

use crate::core::{Action, Guard, State};

/// A rule moving the machine from `from` to `to` when `event` arrives.
///
/// Guards run left to right and stop at the first failure. Actions run in
/// registration order once the transition has been selected.
pub struct Transition<S, E, M, D> {
    pub event: E,
    pub from: S,
    pub to: S,
    pub guards: Vec<Guard<S, E, M, D>>,
    pub actions: Vec<Action<S, E, M, D>>,
}

impl<S: State, E, M, D> Transition<S, E, M, D> {
    /// Create an unguarded transition with no actions.
    pub fn new(event: E, from: S, to: S) -> Self {
        Self {
            event,
            from,
            to,
            guards: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Append a guard predicate.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S, &M, &E, &D) -> bool + Send + Sync + 'static,
    {
        self.guards.push(Guard::new(predicate));
        self
    }

    /// Append an action callback.
    pub fn then<F>(mut self, effect: F) -> Self
    where
        F: Fn(&S, &S, &mut M, &E, &D) + Send + Sync + 'static,
    {
        self.actions.push(Action::new(effect));
        self
    }

    /// Check whether this transition applies (pure).
    pub fn applicable(&self, state: &S, memory: &M, event: &E, data: &D) -> bool {
        if *state != self.from {
            return false;
        }

        self.guards
            .iter()
            .all(|guard| guard.check(state, memory, event, data))
    }

    /// Run every action in order and return the destination state.
    pub fn apply(&self, memory: &mut M, event: &E, data: &D) -> S {
        for action in &self.actions {
            action.apply(&self.from, &self.to, memory, event, data);
        }
        self.to.clone()
    }
}

impl<S: std::fmt::Debug, E: std::fmt::Debug, M, D> std::fmt::Debug for Transition<S, E, M, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guards", &self.guards.len())
            .field("actions", &self.actions.len())
            .finish()
    }
}
