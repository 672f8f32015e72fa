//! Explicit Runge-Kutta solvers for systems of ordinary differential equations.
//!
//! # Modules
//!
//! - [`transient`]: time-marching solvers: classical fixed-step
//!   [`rk4`](transient::rk4) and adaptive Fehlberg
//!   [`rkf45`](transient::rkf45)
//!
//! The [`Integrator`] facade wraps both solvers behind the two calls most
//! users need, [`Integrator::integrate`] and [`Integrator::integrate_adaptive`].

mod integrator;

pub mod transient;

pub use integrator::{DEFAULT_STEPS, DEFAULT_T0, DEFAULT_TF, Integrator};
