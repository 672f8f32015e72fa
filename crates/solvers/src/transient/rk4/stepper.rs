use runge_core::VectorField;

use crate::transient::stage::Stages;

/// Stage times as fractions of `h`.
const NODES: [f64; 4] = [0.0, 0.5, 0.5, 1.0];

/// Stage argument weights over the earlier stages.
const SHIFTS: [&[f64]; 4] = [&[], &[0.5], &[0.0, 0.5], &[0.0, 0.0, 1.0]];

/// Evaluates the four classical stages of every component from `(t, state)`.
///
/// ```text
/// k1 = h·f(t, y)
/// k2 = h·f(t + h/2, y + k1/2)
/// k3 = h·f(t + h/2, y + k2/2)
/// k4 = h·f(t + h,   y + k3)
/// ```
pub(crate) fn evaluate<F: VectorField>(
    field: &F,
    stages: &mut Stages<4>,
    t: f64,
    h: f64,
    state: &[f64],
) {
    for (stage, (&node, shift)) in NODES.iter().zip(SHIFTS).enumerate() {
        stages.eval(field, stage, t + node * h, h, state, shift);
    }
}

/// Combines one component's stages into `(k1 + 2k2 + 2k3 + k4) / 6`.
pub(crate) fn increment(k: &[f64; 4]) -> f64 {
    (k[0] + 2.0 * k[1] + 2.0 * k[2] + k[3]) / 6.0
}
