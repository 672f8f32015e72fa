//! Adaptive Runge-Kutta-Fehlberg 4(5) solver.
//!
//! # Algorithm
//!
//! Each step evaluates the six Fehlberg stages of the whole system and forms
//! two increments per component from them: a 4th-order one, which is
//! committed, and a 5th-order one, used only to estimate the local error
//! `R = step_5 - step_4`. Each component recommends a next step size
//!
//! ```text
//! h_next = h · (tolerance / (2·‖R‖))^(1/4)
//! ```
//!
//! and the most conservative recommendation across components wins. The
//! winner is clamped into `[min_step_size, max_step_size]` and used for the
//! next step by every component, so components never drift apart in time.
//!
//! # Limitations
//!
//! - **No rejection**: a step is never retried. The error estimate only
//!   shapes the *next* step size.
//! - **Overshoot**: the last step may carry `t` past `tf`. Shortening it
//!   would break the step-size bounds.
//! - **Zero error**: a component whose error estimate vanishes places no
//!   constraint on the step. If no component does, the step falls back to
//!   `min_step_size`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] for the initial state and one per committed
//! step, carrying the step size taken and the clamped next step size.
//! Observers can return [`Action::StopEarly`] to halt immediately.

mod action;
mod config;
mod control;
mod error;
mod event;
mod solution;
mod stepper;
mod tableau;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_TOLERANCE, MAX_STEPS_AT_MIN};
pub use control::{Direction, StepBounds};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use runge_core::{Observer, Trajectory, VectorField};
use tracing::{debug, trace};

use crate::transient::{DimensionMismatch, stage::Stages};

use control::tighter;

/// Integrates `field` adaptively from `t0` until time reaches `tf`.
///
/// The first step is `(tf - t0) / 100`, clamped into the resolved
/// [`StepBounds`]. Every later step is the clamped, most conservative
/// recommendation of the previous step.
///
/// The returned trajectory starts with `(t0, initial)` and holds one sample
/// per committed step at the post-step time. A zero-length span returns the
/// initial sample alone.
///
/// # Errors
///
/// Returns an error before any stepping if the number of initial conditions
/// differs from the number of equations, the time span is not finite, or the
/// config does not yield valid step bounds for the span.
pub fn solve<F, Obs>(
    field: &F,
    initial: &[f64],
    t0: f64,
    tf: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    DimensionMismatch::check(field, initial)?;
    if !(tf - t0).is_finite() {
        return Err(Error::NonFiniteSpan { t0, tf });
    }

    let dimension = initial.len();
    let mut trajectory = Trajectory::new(dimension);
    trajectory.push(t0, initial);

    if t0 == tf {
        debug!(t0, "empty span, nothing to integrate");
        return Ok(Solution {
            status: Status::Complete,
            trajectory,
            steps: 0,
            evaluations: 0,
        });
    }

    let bounds = config.bounds(t0, tf)?;
    let direction = Direction::of(t0, tf);
    let in_progress = direction.guard();
    let tolerance = config.tolerance();

    let mut h = bounds.clamp(Some((tf - t0) / 100.0), direction);

    debug!(
        dimension,
        t0,
        tf,
        tolerance,
        min_step_size = bounds.min(),
        max_step_size = bounds.max(),
        initial_step_size = h,
        "starting rkf45 integration"
    );

    let mut t = t0;
    let mut state = initial.to_vec();
    let mut next = vec![0.0; dimension];
    let mut stages = Stages::default();

    let event = Event {
        step: 0,
        time: t0,
        step_size: 0.0,
        next_step_size: h,
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

    let mut step = 0;
    while in_progress(t, tf) {
        step += 1;

        stepper::evaluate(field, &mut stages, t, h, &state);
        let mut tightest = None;
        for (index, slot) in next.iter_mut().enumerate() {
            let proposal = stepper::propose(stages.row(index), h, tolerance);
            tightest = tighter(tightest, proposal.next_step);
            *slot = state[index] + proposal.increment;
        }
        std::mem::swap(&mut state, &mut next);

        let step_size = h;
        t += step_size;
        trajectory.push(t, &state);

        h = bounds.clamp(tightest, direction);
        if tightest != Some(h) {
            trace!(step, candidate = ?tightest, clamped = h, "clamped next step size");
        }
        trace!(step, time = t, step_size, "committed rkf45 step");

        let event = Event {
            step,
            time: t,
            step_size,
            next_step_size: h,
            state: &state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, time = t, "rkf45 integration stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
                evaluations: stages.evaluations(),
            });
        }
    }

    debug!(
        steps = step,
        evaluations = stages.evaluations(),
        final_time = t,
        "finished rkf45 integration"
    );

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps: step,
        evaluations: stages.evaluations(),
    })
}

/// Integrates `field` adaptively without observation.
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
    config: &Config,
) -> Result<Solution, Error> {
    solve(field, initial, t0, tf, config, ())
}

/// One Fehlberg step of a single component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentStep {
    /// The 4th-order increment.
    pub increment: f64,

    /// Recommended next step size, or `None` if the local error vanished and
    /// the component places no constraint on the step.
    pub next_step_size: Option<f64>,
}

/// Computes the Fehlberg step of component `index` from `(t, state)`.
///
/// The stages of the whole system are evaluated, since component `index`
/// reads the stages of the components it is coupled to. The increment is not
/// applied, and the recommended step size is not clamped.
///
/// # Panics
///
/// Panics if `index` is out of bounds for `state`, or if `state` does not
/// have one value per equation.
pub fn component_step<F: VectorField>(
    field: &F,
    index: usize,
    t: f64,
    h: f64,
    tolerance: f64,
    state: &[f64],
) -> ComponentStep {
    let mut stages = Stages::default();
    stepper::evaluate(field, &mut stages, t, h, state);
    let proposal = stepper::propose(stages.row(index), h, tolerance);

    ComponentStep {
        increment: proposal.increment,
        next_step_size: proposal.next_step,
    }
}
