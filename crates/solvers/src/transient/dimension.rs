use runge_core::VectorField;
use thiserror::Error;

/// The initial conditions do not match the number of equations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected {equations} initial conditions, got {initial_conditions}")]
pub struct DimensionMismatch {
    /// Number of equations in the vector field.
    pub equations: usize,

    /// Number of initial conditions supplied.
    pub initial_conditions: usize,
}

impl DimensionMismatch {
    /// Checks that `initial` holds one value per equation of `field`.
    pub(crate) fn check<F: VectorField>(field: &F, initial: &[f64]) -> Result<(), Self> {
        let equations = field.dimension();
        if initial.len() == equations {
            Ok(())
        } else {
            Err(Self {
                equations,
                initial_conditions: initial.len(),
            })
        }
    }
}
