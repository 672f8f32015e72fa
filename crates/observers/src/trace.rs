use runge_core::Observer;
use tracing::debug;

use crate::traits::{HasState, HasStepSize, HasTime};

/// Forwards every solver event to [`tracing`] at debug level.
///
/// Logs one event per sample with its time, step size, and, when enabled,
/// the full state vector. Never returns an action.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver {
    with_state: bool,
}

impl TraceObserver {
    /// Creates an observer that logs time and step size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also logs the state vector of each sample.
    #[must_use]
    pub fn with_state(mut self) -> Self {
        self.with_state = true;
        self
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasTime + HasStepSize + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.with_state {
            debug!(
                time = event.time(),
                step_size = ?event.step_size(),
                state = ?event.state(),
                "integration sample"
            );
        } else {
            debug!(
                time = event.time(),
                step_size = ?event.step_size(),
                "integration sample"
            );
        }
        None
    }
}
