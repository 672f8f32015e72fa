use runge_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Time reached or passed `tf`.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an adaptive Fehlberg integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The initial sample followed by one sample per committed step.
    pub trajectory: Trajectory,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Number of vector field evaluations.
    pub evaluations: usize,
}
