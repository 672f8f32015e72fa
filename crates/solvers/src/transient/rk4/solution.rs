use runge_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step RK4 integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// One sample per committed step.
    pub trajectory: Trajectory,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Number of vector field evaluations.
    pub evaluations: usize,
}
