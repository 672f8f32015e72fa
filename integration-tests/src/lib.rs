//! Shared systems for the integration tests.

use runge_core::EquationSet;

/// `y' = -y`, solved by `y(t) = y(0)·e^{-t}`.
pub fn decay() -> EquationSet {
    EquationSet::new().with_equation(|_t, y| -y[0])
}

/// The harmonic oscillator `y1' = y2`, `y2' = -y1`.
pub fn oscillator() -> EquationSet {
    EquationSet::new()
        .with_equation(|_t, y| y[1])
        .with_equation(|_t, y| -y[0])
}

/// `y' = 20·cos(20t)`, a forced problem whose error estimate never vanishes.
pub fn forced() -> EquationSet {
    EquationSet::new().with_equation(|t, _y| 20.0 * (20.0 * t).cos())
}

/// Returns `y1² + y2²` at every sample of an oscillator output.
///
/// # Panics
///
/// Panics if `output` has fewer than two components.
pub fn radius_squared(output: &[Vec<f64>]) -> Vec<f64> {
    output[0]
        .iter()
        .zip(&output[1])
        .map(|(y1, y2)| y1 * y1 + y2 * y2)
        .collect()
}
