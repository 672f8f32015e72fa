//! Reusable observers for the Runge solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both transient solvers.
//!
//! # Modules
//!
//! - [`traits`]: traits shared by the events and actions of both solvers
//!   ([`HasTime`], [`HasStepSize`], [`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StepRecorder`]: records the time and step size of every committed step
//! - [`StepBudget`]: stops a run after a fixed number of steps
//! - [`TraceObserver`]: forwards every event to [`tracing`]
//!
//! [`Observer`]: runge_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasStepSize`]: traits::HasStepSize
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod budget;
mod recorder;
mod trace;

pub use budget::StepBudget;
pub use recorder::StepRecorder;
pub use trace::TraceObserver;
