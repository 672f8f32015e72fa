//! Classical fixed-step Runge-Kutta solver.
//!
//! Steps a [`VectorField`] across a uniform grid of `steps` intervals between
//! `t0` and `tf`. Each component is advanced with the classical 4th-order
//! increment:
//!
//! ```text
//! y_{n+1} = y_n + (k1 + 2k2 + 2k3 + k4) / 6
//! ```
//!
//! Each stage is evaluated for the whole system at once, against the
//! pre-step state shifted by the earlier stages of every component. The
//! increments are committed together once all four stages are done.
//!
//! # Example
//!
//! ```
//! use runge_core::EquationSet;
//! use runge_solvers::transient::rk4;
//!
//! let decay = EquationSet::new().with_equation(|_t, y| -y[0]);
//! let solution = rk4::solve_unobserved(&decay, &[1.0], 0.0, 1.0, 100)?;
//!
//! let (t, y) = solution.trajectory.last().unwrap();
//! assert!((t - 1.0).abs() < 1e-12);
//! assert!((y[0] - (-1.0_f64).exp()).abs() < 1e-9);
//! # Ok::<(), rk4::Error>(())
//! ```

mod action;
mod error;
mod event;
mod solution;
mod stepper;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use runge_core::{Observer, Trajectory, VectorField};
use tracing::{debug, trace};

use crate::transient::{DimensionMismatch, stage::Stages};

/// Integrates `field` from `t0` to `tf` in `steps` uniform RK4 steps.
///
/// # Algorithm
///
/// 1. Validate the configuration and compute `h = (tf - t0) / steps` once.
/// 2. Emit the initial state as step 0.
/// 3. For each step `k` in `1..=steps`:
///    - Evaluate the four stages of every component from `t0 + (k - 1)·h`
///      and the current state, which stays frozen meanwhile.
///    - Commit all increments at once and record the sample at `t0 + k·h`.
///    - Emit an [`Event`]; stop if the observer returns [`Action::StopEarly`].
///
/// The returned trajectory holds one sample per committed step, so a complete
/// run has exactly `steps` samples ending at `tf`.
///
/// # Errors
///
/// Returns an error before any stepping if the number of initial conditions
/// differs from the number of equations, the time span is not finite, or
/// `steps` is zero.
pub fn solve<F, Obs>(
    field: &F,
    initial: &[f64],
    t0: f64,
    tf: f64,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    DimensionMismatch::check(field, initial)?;
    if !t0.is_finite() || !tf.is_finite() {
        return Err(Error::NonFiniteSpan { t0, tf });
    }
    if steps == 0 {
        return Err(Error::ZeroSteps);
    }

    #[allow(clippy::cast_precision_loss)]
    let h = (tf - t0) / steps as f64;
    let dimension = initial.len();

    debug!(dimension, t0, tf, steps, step_size = h, "starting rk4 integration");

    let mut state = initial.to_vec();
    let mut next = vec![0.0; dimension];
    let mut stages = Stages::default();
    let mut trajectory = Trajectory::with_capacity(dimension, steps);

    let event = Event {
        step: 0,
        time: t0,
        step_size: h,
        state: &state,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
            evaluations: 0,
        });
    }

    for step in 1..=steps {
        #[allow(clippy::cast_precision_loss)]
        let t = t0 + (step - 1) as f64 * h;

        stepper::evaluate(field, &mut stages, t, h, &state);
        for (index, slot) in next.iter_mut().enumerate() {
            *slot = state[index] + stepper::increment(stages.row(index));
        }
        std::mem::swap(&mut state, &mut next);

        #[allow(clippy::cast_precision_loss)]
        let time = t0 + step as f64 * h;
        trajectory.push(time, &state);
        trace!(step, time, "committed rk4 step");

        let event = Event {
            step,
            time,
            step_size: h,
            state: &state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, "rk4 integration stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
                evaluations: stages.evaluations(),
            });
        }
    }

    debug!(
        steps,
        evaluations = stages.evaluations(),
        "finished rk4 integration"
    );

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps,
        evaluations: stages.evaluations(),
    })
}

/// Integrates `field` with uniform RK4 steps without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: VectorField>(
    field: &F,
    initial: &[f64],
    t0: f64,
    tf: f64,
    steps: usize,
) -> Result<Solution, Error> {
    solve(field, initial, t0, tf, steps, ())
}

/// Returns the RK4 increment of component `index` for one step from `(t, state)`.
///
/// All stages of the system are evaluated, since component `index` reads the
/// stages of the components it is coupled to. The increment is not applied.
///
/// # Panics
///
/// Panics if `index` is out of bounds for `state`, or if `state` does not
/// have one value per equation.
pub fn increment<F: VectorField>(
    field: &F,
    index: usize,
    t: f64,
    h: f64,
    state: &[f64],
) -> f64 {
    let mut stages = Stages::default();
    stepper::evaluate(field, &mut stages, t, h, state);
    stepper::increment(stages.row(index))
}
