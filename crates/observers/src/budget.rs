use runge_core::Observer;

use crate::traits::{CanStopEarly, HasStepSize};

/// Stops a run once it has committed `max_steps` steps.
///
/// Useful as a guard on adaptive runs whose step count depends on the
/// tolerance and the step bounds.
#[derive(Debug, Clone, Copy)]
pub struct StepBudget {
    max_steps: usize,
    steps: usize,
}

impl StepBudget {
    /// Creates a budget of `max_steps` committed steps.
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        Self {
            max_steps,
            steps: 0,
        }
    }

    /// Returns the number of steps seen so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns `true` if the budget has been used up.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.steps >= self.max_steps
    }
}

impl<E: HasStepSize, A: CanStopEarly> Observer<E, A> for StepBudget {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.step_size().is_some() {
            self.steps += 1;
        }
        self.is_exhausted().then(A::stop_early)
    }
}
