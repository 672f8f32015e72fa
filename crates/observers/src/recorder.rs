use runge_core::Observer;

use crate::traits::{HasStepSize, HasTime};

/// Records the time and step size of every committed step.
///
/// The initial event carries no step and is skipped. Pass `&mut recorder` to
/// a solver to inspect the record after the run.
///
/// # Example
///
/// ```
/// use runge_core::EquationSet;
/// use runge_observers::StepRecorder;
/// use runge_solvers::transient::rkf45;
///
/// let decay = EquationSet::new().with_equation(|_t, y| -y[0]);
/// let mut recorder = StepRecorder::new();
///
/// let solution = rkf45::solve(&decay, &[1.0], 0.0, 1.0, &rkf45::Config::default(), &mut recorder)?;
///
/// assert_eq!(recorder.len(), solution.steps);
/// # Ok::<(), rkf45::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    times: Vec<f64>,
    step_sizes: Vec<f64>,
}

impl StepRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time reached by each recorded step.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the step size of each recorded step.
    #[must_use]
    pub fn step_sizes(&self) -> &[f64] {
        &self.step_sizes
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.step_sizes.len()
    }

    /// Returns `true` if no steps were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.step_sizes.is_empty()
    }

    /// Returns the smallest and largest step magnitude recorded.
    #[must_use]
    pub fn magnitude_range(&self) -> Option<(f64, f64)> {
        let mut sizes = self.step_sizes.iter().map(|h| h.abs());
        let first = sizes.next()?;
        Some(sizes.fold((first, first), |(lo, hi), h| (lo.min(h), hi.max(h))))
    }
}

impl<E, A> Observer<E, A> for StepRecorder
where
    E: HasTime + HasStepSize,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(step_size) = event.step_size() {
            self.times.push(event.time());
            self.step_sizes.push(step_size);
        }
        None
    }
}

/// Allows `&mut StepRecorder` to be passed to solvers that take an observer
/// by value, so the record can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut StepRecorder
where
    E: HasTime + HasStepSize,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use runge_core::EquationSet;
    use runge_solvers::transient::rk4;

    #[test]
    fn records_uniform_steps() {
        let field = EquationSet::new().with_equation(|_t, y| -y[0]);
        let mut recorder = StepRecorder::new();

        rk4::solve(&field, &[1.0], 0.0, 2.0, 8, &mut recorder).expect("should solve");

        assert_eq!(recorder.len(), 8);
        assert!(recorder.step_sizes().iter().all(|&h| h == 0.25));
        assert_relative_eq!(recorder.times()[7], 2.0);

        let (lo, hi) = recorder.magnitude_range().expect("non-empty");
        assert_relative_eq!(lo, 0.25);
        assert_relative_eq!(hi, 0.25);
    }

    #[test]
    fn empty_recorder_has_no_range() {
        let recorder = StepRecorder::new();
        assert!(recorder.is_empty());
        assert_eq!(recorder.magnitude_range(), None);
    }
}
