//! What an observer may assume about a solver's events and actions.
//!
//! `rk4` and `rkf45` each define their own `Event` and `Action` types. An
//! observer written against these traits runs under either solver:
//!
//! - [`HasTime`], [`HasStepSize`], [`HasState`] read a sample from an event
//! - [`CanStopEarly`] builds the stop action
//!
//! # Example
//!
//! ```rust
//! use runge_core::Observer;
//! use runge_observers::traits::{CanStopEarly, HasState};
//!
//! /// Stops once the first component leaves `[-limit, limit]`.
//! struct Escape {
//!     limit: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Escape {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.state()[0].abs() > self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use runge_solvers::transient::{rk4, rkf45};

/// An event that carries the time of its sample.
pub trait HasTime {
    /// Returns the time the event's state belongs to.
    fn time(&self) -> f64;
}

/// An event that carries the step size taken to reach it.
pub trait HasStepSize {
    /// Returns the step size, or `None` for the initial event.
    fn step_size(&self) -> Option<f64>;
}

/// An event that carries the state vector.
pub trait HasState {
    /// Returns the state at the event's time.
    fn state(&self) -> &[f64];
}

/// An action that can end a run before `tf`.
pub trait CanStopEarly {
    /// Returns the stop action.
    fn stop_early() -> Self;
}

// --- rk4::Event ---

impl HasTime for rk4::Event<'_> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl HasStepSize for rk4::Event<'_> {
    fn step_size(&self) -> Option<f64> {
        (self.step > 0).then_some(self.step_size)
    }
}

impl HasState for rk4::Event<'_> {
    fn state(&self) -> &[f64] {
        self.state
    }
}

// --- rkf45::Event ---

impl HasTime for rkf45::Event<'_> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl HasStepSize for rkf45::Event<'_> {
    fn step_size(&self) -> Option<f64> {
        (self.step > 0).then_some(self.step_size)
    }
}

impl HasState for rkf45::Event<'_> {
    fn state(&self) -> &[f64] {
        self.state
    }
}

// --- actions ---

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for rkf45::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
