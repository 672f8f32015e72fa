use thiserror::Error;

use crate::transient::DimensionMismatch;

use super::ConfigError;

/// Errors that can occur before adaptive integration begins.
///
/// Every variant is a configuration error: it is detected before any step is
/// taken, so no partial trajectory is ever produced. Degenerate error
/// estimates and out-of-bounds step sizes are handled by the step-size
/// controller and never surface here.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),

    #[error("time span must be finite, got [{t0}, {tf}]")]
    NonFiniteSpan { t0: f64, tf: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
