//! Side-effecting actions run when a transition fires.

/// Callback that commits the effect of a transition to memory.
///
/// Actions receive the source and destination states, a mutable reference
/// to the machine memory, and the event with its payload. They never decide
/// whether a transition applies; that is the job of guards, which run first.
pub struct Action<S, E, M, D> {
    effect: Box<dyn Fn(&S, &S, &mut M, &E, &D) + Send + Sync>,
}

impl<S, E, M, D> Action<S, E, M, D> {
    /// Create an action from a callback.
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn(&S, &S, &mut M, &E, &D) + Send + Sync + 'static,
    {
        Action {
            effect: Box::new(effect),
        }
    }

    /// Run the callback against memory.
    pub fn apply(&self, from: &S, to: &S, memory: &mut M, event: &E, data: &D) {
        (self.effect)(from, to, memory, event, data)
    }
}

impl<S, E, M, D> std::fmt::Debug for Action<S, E, M, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Action(..)")
    }
}
