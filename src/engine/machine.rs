//! State machine that evaluates guarded transitions against shared memory.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::engine::error::FsmError;
use crate::engine::transition::Transition;
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Guarded finite state machine.
///
/// Transitions are keyed by (source state, event). Under one key they are
/// evaluated in registration order and the first whose guards all pass wins.
/// The machine owns its memory for its whole lifetime; actions mutate it in
/// place and it is never replaced.
pub struct Fsm<S: State, E: Event, M, D> {
    current: S,
    memory: M,
    table: HashMap<(S, E), Vec<Transition<S, E, M, D>>>,
    history: StateHistory<S, D>,
}

impl<S: State, E: Event, M, D> Fsm<S, E, M, D> {
    /// Create a machine in `initial` with an empty transition table.
    pub fn new(initial: S, memory: M) -> Self {
        Self {
            current: initial,
            memory,
            table: HashMap::new(),
            history: StateHistory::new(),
        }
    }

    /// Register a transition after every transition already registered
    /// under the same (state, event) key.
    pub fn add_transition(&mut self, transition: Transition<S, E, M, D>) {
        let key = (transition.from.clone(), transition.event.clone());
        self.table.entry(key).or_default().push(transition);
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Read-only view of the machine memory (pure)
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S, D> {
        &self.history
    }

    /// Whether any transition leaves `state`.
    pub fn has_outgoing(&self, state: &S) -> bool {
        self.table.keys().any(|(from, _)| from == state)
    }

    /// Whether the current state has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        !self.has_outgoing(&self.current)
    }

    /// Check whether `event` with `data` would be accepted right now.
    ///
    /// Never mutates memory and never fails: an unregistered key simply
    /// yields `false`.
    pub fn can_fire(&self, event: &E, data: &D) -> bool {
        self.table
            .get(&(self.current.clone(), event.clone()))
            .is_some_and(|candidates| {
                candidates
                    .iter()
                    .any(|t| t.applicable(&self.current, &self.memory, event, data))
            })
    }
}

impl<S: State, E: Event, M, D: Clone> Fsm<S, E, M, D> {
    /// Fire `event` with `data`.
    ///
    /// Selects the first applicable transition for (current state, event),
    /// runs its actions, moves to its destination and returns whether the
    /// new state still has outgoing transitions. Guards are fully evaluated
    /// before any action runs, so a rejected event leaves memory untouched.
    pub fn fire(&mut self, event: &E, data: &D) -> Result<bool, FsmError> {
        let Some(candidates) = self.table.get(&(self.current.clone(), event.clone())) else {
            warn!(
                state = self.current.name(),
                event = event.name(),
                "event not registered for state"
            );
            return Err(FsmError::NoSuchTransition {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            });
        };

        let Some(transition) = candidates
            .iter()
            .find(|t| t.applicable(&self.current, &self.memory, event, data))
        else {
            warn!(
                state = self.current.name(),
                event = event.name(),
                "no transition accepted the event data"
            );
            return Err(FsmError::NoApplicableTransition {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            });
        };

        let from = self.current.clone();
        let to = transition.apply(&mut self.memory, event, data);

        debug!(
            from = from.name(),
            to = to.name(),
            event = event.name(),
            "transition fired"
        );

        self.history.record(StateTransition {
            from,
            to: to.clone(),
            event: event.name().to_string(),
            data: data.clone(),
            timestamp: Utc::now(),
        });
        self.current = to;

        Ok(!self.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Door {
        Closed,
        Open,
        Broken,
    }

    impl State for Door {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "Closed",
                Self::Open => "Open",
                Self::Broken => "Broken",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Push {
        Gently,
        Hard,
    }

    impl Event for Push {
        fn name(&self) -> &str {
            match self {
                Self::Gently => "Gently",
                Self::Hard => "Hard",
            }
        }
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Log {
        entries: Vec<String>,
    }

    type DoorTransition = Transition<Door, Push, Log, u32>;

    fn door() -> Fsm<Door, Push, Log, u32> {
        let mut fsm = Fsm::new(Door::Closed, Log::default());
        fsm.add_transition(
            DoorTransition::new(Push::Gently, Door::Closed, Door::Open)
                .when(|_, _, _, force| *force >= 2)
                .then(|_, _, log, _, _| log.entries.push("opened".into())),
        );
        fsm.add_transition(
            DoorTransition::new(Push::Gently, Door::Closed, Door::Closed)
                .then(|_, _, log, _, _| log.entries.push("stuck".into())),
        );
        fsm.add_transition(
            DoorTransition::new(Push::Hard, Door::Open, Door::Broken)
                .when(|_, _, _, force| *force > 9),
        );
        fsm
    }

    #[test]
    fn first_applicable_transition_wins() {
        let mut fsm = door();

        assert_eq!(fsm.fire(&Push::Gently, &1), Ok(true));
        assert_eq!(fsm.current_state(), &Door::Closed);
        assert_eq!(fsm.memory().entries, vec!["stuck"]);

        assert_eq!(fsm.fire(&Push::Gently, &5), Ok(true));
        assert_eq!(fsm.current_state(), &Door::Open);
        assert_eq!(fsm.memory().entries, vec!["stuck", "opened"]);
    }

    #[test]
    fn unregistered_key_is_no_such_transition() {
        let mut fsm = door();

        assert!(!fsm.can_fire(&Push::Hard, &100));
        assert!(matches!(
            fsm.fire(&Push::Hard, &100),
            Err(FsmError::NoSuchTransition { .. })
        ));
        assert_eq!(fsm.current_state(), &Door::Closed);
    }

    #[test]
    fn failing_guards_are_no_applicable_transition() {
        let mut fsm = door();
        fsm.fire(&Push::Gently, &3).unwrap();

        assert!(!fsm.can_fire(&Push::Hard, &4));
        let err = fsm.fire(&Push::Hard, &4).unwrap_err();
        assert_eq!(
            err,
            FsmError::NoApplicableTransition {
                state: "Open".to_string(),
                event: "Hard".to_string(),
            }
        );
        assert_eq!(fsm.current_state(), &Door::Open);
        assert_eq!(fsm.history().len(), 1);
    }

    #[test]
    fn fire_reports_terminal_state() {
        let mut fsm = door();
        fsm.fire(&Push::Gently, &3).unwrap();

        assert_eq!(fsm.fire(&Push::Hard, &10), Ok(false));
        assert!(fsm.is_terminal());
        assert!(matches!(
            fsm.fire(&Push::Gently, &3),
            Err(FsmError::NoSuchTransition { .. })
        ));
    }

    #[test]
    fn can_fire_does_not_mutate() {
        let fsm = door();
        let before = fsm.memory().clone();

        for force in 0..20 {
            let _ = fsm.can_fire(&Push::Gently, &force);
            let _ = fsm.can_fire(&Push::Hard, &force);
        }

        assert_eq!(fsm.memory(), &before);
        assert_eq!(fsm.current_state(), &Door::Closed);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn history_records_accepted_transitions() {
        let mut fsm = door();
        fsm.fire(&Push::Gently, &0).unwrap();
        fsm.fire(&Push::Gently, &2).unwrap();
        fsm.fire(&Push::Hard, &12).unwrap();

        let path = fsm.history().get_path();
        assert_eq!(path, vec![&Door::Closed, &Door::Closed, &Door::Open, &Door::Broken]);
        let forces: Vec<u32> = fsm.history().transitions().iter().map(|t| t.data).collect();
        assert_eq!(forces, vec![0, 2, 12]);
        assert_eq!(fsm.history().transitions()[2].event, "Hard");
    }
}
