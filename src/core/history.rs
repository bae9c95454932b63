//! State transition history tracking.
//!
//! Each accepted transition is appended with the event payload that
//! caused it, in the order the machine fired.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
///
/// `data` is the payload the event carried, so the record says who acted
/// and with what, not only where the machine went.
///
/// # Example
///
/// ```rust
/// use bazar::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Light::Red,
///     to: Light::Green,
///     event: "Go".to_string(),
///     data: 3u32,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, "Go");
/// assert_eq!(transition.data, 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "D: Serialize", deserialize = "D: Deserialize<'de>"))]
pub struct StateTransition<S: State, D = ()> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the event that fired the transition
    pub event: String,
    /// Payload the event carried
    pub data: D,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only history of accepted transitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "D: Serialize", deserialize = "D: Deserialize<'de>"))]
pub struct StateHistory<S: State, D = ()> {
    transitions: Vec<StateTransition<S, D>>,
}

impl<S: State, D> Default for StateHistory<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, D> StateHistory<S, D> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S, D>) {
        self.transitions.push(transition);
    }

/// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first source state, then
    /// the `to` state of each transition. Self-loops appear once per firing.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in the order they fired.
    pub fn transitions(&self) -> &[StateTransition<S, D>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
