//! Solvers for transient problems: marching `dy/dt = f(t, y)` through time.
//!
//! Both solvers evaluate their stages in order across the whole system. Each
//! stage argument is the pre-step state shifted by the earlier stages of
//! every component; the pre-step state is never written while a step is in
//! progress. The increments are committed together once all stages are done.
//!
//! # Solvers
//!
//! - [`rk4`]: classical 4th-order Runge-Kutta on a uniform grid
//! - [`rkf45`]: embedded Runge-Kutta-Fehlberg 4(5) with step-size control

mod dimension;
mod stage;

pub use dimension::DimensionMismatch;

pub mod rk4;
pub mod rkf45;
