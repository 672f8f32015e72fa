//! Logs an adaptive integration through `tracing`.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trace
//! cargo run --example trace -- 1e-8
//! ```
//!
//! Integrates the harmonic oscillator over one period with the given
//! tolerance (default `1e-6`) and prints the step statistics.

use std::{error::Error, f64::consts::TAU};

use runge_core::{EquationSet, Observer};
use runge_observers::{StepRecorder, TraceObserver};
use runge_solvers::transient::rkf45;
use tracing::Level;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let tolerance = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<f64>())
        .transpose()?
        .unwrap_or(1e-6);

    let oscillator = EquationSet::new()
        .with_equation(|_t, y| y[1])
        .with_equation(|_t, y| -y[0]);
    let config = rkf45::Config::new(tolerance)?;

    let mut tracer = TraceObserver::new().with_state();
    let mut recorder = StepRecorder::new();
    let observer = |event: &rkf45::Event<'_>| -> Option<rkf45::Action> {
        let _: Option<rkf45::Action> = tracer.observe(event);
        recorder.observe(event)
    };
    let solution = rkf45::solve(&oscillator, &[1.0, 0.0], 0.0, TAU, &config, observer)?;

    let (t, y) = solution
        .trajectory
        .last()
        .ok_or("trajectory should hold the initial sample")?;
    println!("steps:       {}", solution.steps);
    println!("evaluations: {}", solution.evaluations);
    println!("final time:  {t:.6}");
    println!("final state: {y:?}");
    if let Some((lo, hi)) = recorder.magnitude_range() {
        println!("step sizes:  [{lo:.3e}, {hi:.3e}]");
    }

    Ok(())
}
