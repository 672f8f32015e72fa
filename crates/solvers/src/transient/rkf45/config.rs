use thiserror::Error;

use super::control::StepBounds;

/// Default tolerance on the local error estimate.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Most steps a run may need when every step is at the minimum size.
pub const MAX_STEPS_AT_MIN: f64 = 1e9;

/// Configuration for the adaptive solver.
///
/// Step bounds are magnitudes; the direction of integration supplies the
/// sign. When a bound is not set it defaults to a fraction of the span:
/// `|tf - t0| / 100000` for the minimum and `|tf - t0| / 100` for the maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    tolerance: f64,
    min_step_size: Option<f64>,
    max_step_size: Option<f64>,
}

/// Errors that can occur when validating an adaptive solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("min_step_size must be finite and positive")]
    MinStep,

    #[error("max_step_size must be finite and positive")]
    MaxStep,

    #[error("min_step_size {min} exceeds max_step_size {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("min_step_size {min} is too small to advance time near {time}")]
    BelowResolution { min: f64, time: f64 },

    #[error(
        "min_step_size {min} could need more than {limit:e} steps to cover {span}",
        limit = MAX_STEPS_AT_MIN
    )]
    TooManySteps { min: f64, span: f64 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            min_step_size: None,
            max_step_size: None,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and default step bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !positive(tolerance) {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            ..Self::default()
        })
    }

    /// Overrides the minimum step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_step_size` is not finite and positive.
    pub fn with_min_step_size(mut self, min_step_size: f64) -> Result<Self, ConfigError> {
        if !positive(min_step_size) {
            return Err(ConfigError::MinStep);
        }
        self.min_step_size = Some(min_step_size);
        Ok(self)
    }

    /// Overrides the maximum step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_step_size` is not finite and positive.
    pub fn with_max_step_size(mut self, max_step_size: f64) -> Result<Self, ConfigError> {
        if !positive(max_step_size) {
            return Err(ConfigError::MaxStep);
        }
        self.max_step_size = Some(max_step_size);
        Ok(self)
    }

    /// Returns the tolerance on the local error estimate.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the minimum step size override, if any.
    #[must_use]
    pub fn min_step_size(&self) -> Option<f64> {
        self.min_step_size
    }

    /// Returns the maximum step size override, if any.
    #[must_use]
    pub fn max_step_size(&self) -> Option<f64> {
        self.max_step_size
    }

    /// Resolves the step bounds for a run from `t0` to `tf`.
    ///
    /// The span must be finite and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is out of range, if the resolved minimum
    /// exceeds the maximum, or if the minimum is too small to change `t`
    /// anywhere in the span or to cover it in [`MAX_STEPS_AT_MIN`] steps.
    pub fn bounds(&self, t0: f64, tf: f64) -> Result<StepBounds, ConfigError> {
        // Deserialized configs skip the builder checks.
        if !positive(self.tolerance) {
            return Err(ConfigError::Tolerance);
        }

        let span = (tf - t0).abs();
        let min = self.min_step_size.unwrap_or(span / 100_000.0);
        let max = self.max_step_size.unwrap_or(span / 100.0);

        if !positive(min) {
            return Err(ConfigError::MinStep);
        }
        if !positive(max) {
            return Err(ConfigError::MaxStep);
        }
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }

        let reach = t0.abs().max(tf.abs());
        if reach + min == reach {
            return Err(ConfigError::BelowResolution { min, time: reach });
        }
        if span / min > MAX_STEPS_AT_MIN {
            return Err(ConfigError::TooManySteps { min, span });
        }

        Ok(StepBounds { min, max })
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
