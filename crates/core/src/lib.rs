//! Core traits and types for the Runge solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`VectorField`]: the right-hand side `dy/dt = f(t, y)`, evaluated one
//!   component at a time
//! - [`EquationSet`]: a [`VectorField`] built from an ordered list of scalar
//!   functions
//! - [`Trajectory`]: the sampled times and per-component values of a run
//! - [`Observer`]: receives solver events and optionally returns control actions

mod field;
mod observer;
mod trajectory;

pub use field::{Equation, EquationSet, VectorField};
pub use observer::Observer;
pub use trajectory::{MisalignedTrajectory, Trajectory};
