/// Watches a running solver and may steer it.
///
/// A solver hands each of its events to the observer. Returning `Some(action)`
/// asks the solver to act on it (every solver here understands stopping
/// early); returning `None` lets the run continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is an
/// observer that never acts.
pub trait Observer<E, A> {
    /// Handles one event, optionally requesting an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
