use thiserror::Error;

use crate::transient::DimensionMismatch;

/// Errors that can occur before fixed-step integration begins.
///
/// Every variant is a configuration error: it is detected before any step is
/// taken, so no partial trajectory is ever produced.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),

    #[error("time span must be finite, got [{t0}, {tf}]")]
    NonFiniteSpan { t0: f64, tf: f64 },

    #[error("steps must be at least 1")]
    ZeroSteps,
}
