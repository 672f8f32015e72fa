/// Event emitted by the RK4 solver for each sample.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each committed step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Time the state belongs to.
    pub time: f64,

    /// The uniform step size of the run.
    pub step_size: f64,

    /// State after the step.
    pub state: &'a [f64],
}
