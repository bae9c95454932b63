//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that determine whether a transition
//! can fire. They see the machine only through shared references, so
//! evaluating a guard can never change memory.

/// Pure predicate that determines if a transition can fire.
///
/// A guard receives the current state, an immutable view of the machine
/// memory, the incoming event and its payload.
///
/// # Example
///
/// ```rust
/// use bazar::core::Guard;
///
/// // (state, memory, event, data)
/// let big_enough: Guard<u8, (), u32, u32> =
///     Guard::new(|_state, floor, _event, amount| amount >= floor);
///
/// assert!(big_enough.check(&0, &8, &(), &10));
/// assert!(!big_enough.check(&0, &8, &(), &7));
/// ```
pub struct Guard<S, E, M, D> {
    predicate: Box<dyn Fn(&S, &M, &E, &D) -> bool + Send + Sync>,
}

impl<S, E, M, D> Guard<S, E, M, D> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &M, &E, &D) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self, state: &S, memory: &M, event: &E, data: &D) -> bool {
        (self.predicate)(state, memory, event, data)
    }
}

impl<S, E, M, D> std::fmt::Debug for Guard<S, E, M, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard(..)")
    }
}
