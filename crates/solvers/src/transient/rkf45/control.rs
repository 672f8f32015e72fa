//! Step-size control for the adaptive solver.

/// Direction of integration, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time increases from `t0` to `tf`.
    Forward,

    /// Time decreases from `t0` to `tf`.
    Backward,
}

impl Direction {
    /// Returns the direction implied by the span `t0 → tf`.
    #[must_use]
    pub fn of(t0: f64, tf: f64) -> Self {
        if tf < t0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    /// Returns `1.0` for forward and `-1.0` for backward integration.
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Returns the loop guard `(t, tf) -> bool` for this direction.
    pub(crate) fn guard(self) -> fn(f64, f64) -> bool {
        match self {
            Self::Forward => before,
            Self::Backward => after,
        }
    }
}

fn before(t: f64, tf: f64) -> bool {
    t < tf
}

fn after(t: f64, tf: f64) -> bool {
    t > tf
}

/// Resolved step-size bounds of an adaptive run, as magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepBounds {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl StepBounds {
    /// Smallest step magnitude the controller will emit.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest step magnitude the controller will emit.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `step` has a magnitude within the bounds.
    #[must_use]
    pub fn contains(&self, step: f64) -> bool {
        (self.min..=self.max).contains(&step.abs())
    }

    /// Maps the tightest candidate step into the bounds.
    ///
    /// A missing candidate (no component constrained the step) and a
    /// candidate below `min` both snap to `min`; a candidate above `max`
    /// snaps to `max`. The result carries the sign of `direction`.
    pub(crate) fn clamp(&self, candidate: Option<f64>, direction: Direction) -> f64 {
        let magnitude = match candidate.map(f64::abs) {
            Some(h) if h < self.min => self.min,
            Some(h) if h > self.max => self.max,
            Some(h) => h,
            None => self.min,
        };
        direction.signum() * magnitude
    }
}

/// Keeps the candidate with the smaller magnitude.
///
/// `None` places no constraint, so any candidate beats it. Ties keep the
/// current value.
pub(crate) fn tighter(current: Option<f64>, candidate: Option<f64>) -> Option<f64> {
    match (current, candidate) {
        (Some(c), Some(n)) if n.abs() < c.abs() => Some(n),
        (None, n) => n,
        (c, _) => c,
    }
}
