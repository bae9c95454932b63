//! Event trait for the external intents a machine reacts to.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine events.
///
/// Events are the second half of the transition table key. They carry no
/// payload themselves; payload travels separately as event data so one
/// event kind can be checked against many different inputs.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}
