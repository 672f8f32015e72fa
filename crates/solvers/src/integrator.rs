use runge_core::{Trajectory, VectorField};

use crate::transient::{rk4, rkf45};

/// Default start time.
pub const DEFAULT_T0: f64 = 0.0;

/// Default end time.
pub const DEFAULT_TF: f64 = 1.0;

/// Default number of fixed steps.
pub const DEFAULT_STEPS: usize = 100;

/// An integrator bound to one vector field.
///
/// `Integrator` is a thin front end over [`rk4`] and [`rkf45`] for callers
/// who only want the trajectory. Use the solver modules directly for
/// observers, step statistics, or early stopping.
///
/// # Example
///
/// ```
/// use runge_core::EquationSet;
/// use runge_solvers::Integrator;
///
/// let oscillator = Integrator::new(
///     EquationSet::new()
///         .with_equation(|_t, y| y[1])
///         .with_equation(|_t, y| -y[0]),
/// );
///
/// let trajectory = oscillator.integrate(&[1.0, 0.0], 0.0, 1.0, 100)?;
/// assert_eq!(trajectory.times().len(), 100);
/// assert_eq!(trajectory.output().len(), 2);
/// # Ok::<(), runge_solvers::transient::rk4::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Integrator<F> {
    field: F,
}

impl<F: VectorField> Integrator<F> {
    /// Creates an integrator for `field`.
    pub fn new(field: F) -> Self {
        Self { field }
    }

    /// Returns the vector field.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Consumes the integrator, returning the vector field.
    pub fn into_field(self) -> F {
        self.field
    }

    /// Integrates from `t0` to `tf` in `steps` uniform RK4 steps.
    ///
    /// See [`rk4::solve`] for the sampling rules.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` does not have one value per equation,
    /// the span is not finite, or `steps` is zero.
    pub fn integrate(
        &self,
        initial: &[f64],
        t0: f64,
        tf: f64,
        steps: usize,
    ) -> Result<Trajectory, rk4::Error> {
        rk4::solve_unobserved(&self.field, initial, t0, tf, steps).map(|s| s.trajectory)
    }

    /// Integrates from `t0` to `tf` with adaptive Fehlberg steps.
    ///
    /// Unset step bounds default to `|tf - t0| / 100000` and `|tf - t0| / 100`.
    /// See [`rkf45::solve`] for the sampling rules.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` does not have one value per equation,
    /// the span is not finite, or the tolerance and step bounds are invalid.
    pub fn integrate_adaptive(
        &self,
        initial: &[f64],
        t0: f64,
        tf: f64,
        tolerance: f64,
        min_step_size: Option<f64>,
        max_step_size: Option<f64>,
    ) -> Result<Trajectory, rkf45::Error> {
        let mut config = rkf45::Config::new(tolerance)?;
        if let Some(min) = min_step_size {
            config = config.with_min_step_size(min)?;
        }
        if let Some(max) = max_step_size {
            config = config.with_max_step_size(max)?;
        }

        rkf45::solve_unobserved(&self.field, initial, t0, tf, &config).map(|s| s.trajectory)
    }
}
