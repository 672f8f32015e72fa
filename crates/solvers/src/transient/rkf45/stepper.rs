use runge_core::VectorField;

use crate::transient::stage::Stages;

use super::tableau::FEHLBERG45;

/// Outcome of one Fehlberg step for a single component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Proposal {
    /// The 4th-order increment, always accepted.
    pub(crate) increment: f64,

    /// Recommended next step size, or `None` if this component places no
    /// constraint on it.
    pub(crate) next_step: Option<f64>,
}

/// Evaluates the six Fehlberg stages of every component from `(t, state)`.
pub(crate) fn evaluate<F: VectorField>(
    field: &F,
    stages: &mut Stages<6>,
    t: f64,
    h: f64,
    state: &[f64],
) {
    let tableau = &FEHLBERG45;
    for (stage, (&node, row)) in tableau.c.iter().zip(&tableau.a).enumerate() {
        stages.eval(field, stage, t + node * h, h, state, &row[..stage]);
    }
}

/// Forms one component's Fehlberg step from its stages `k`.
pub(crate) fn propose(k: &[f64; 6], h: f64, tolerance: f64) -> Proposal {
    let step_4 = weighted(&FEHLBERG45.b4, k);
    let step_5 = weighted(&FEHLBERG45.b5, k);

    Proposal {
        increment: step_4,
        next_step: next_step_size(h, step_5 - step_4, tolerance),
    }
}

/// Scales `h` by `(tolerance / (2·‖error‖))^(1/4)`.
///
/// Returns `None` when the scale factor is unbounded, which happens when the
/// local error vanishes, and also for a non-finite error.
pub(crate) fn next_step_size(h: f64, error: f64, tolerance: f64) -> Option<f64> {
    let norm = euclidean_norm(&[error]);
    if norm == 0.0 {
        return None;
    }

    let candidate = (tolerance / (2.0 * norm)).powf(0.25) * h;
    candidate.is_finite().then_some(candidate)
}

fn weighted(weights: &[f64; 6], k: &[f64; 6]) -> f64 {
    weights.iter().zip(k).map(|(b, k)| b * k).sum()
}

fn euclidean_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use runge_core::EquationSet;

    fn propose_from(field: &EquationSet, state: &[f64], t: f64, h: f64, tol: f64) -> Proposal {
        let mut stages = Stages::default();
        evaluate(field, &mut stages, t, h, state);
        propose(stages.row(0), h, tol)
    }

    #[test]
    fn fourth_order_increment_tracks_decay() {
        let field = EquationSet::new().with_equation(|_t, y| -y[0]);
        let proposal = propose_from(&field, &[1.0], 0.0, 0.1, 1e-6);

        assert_relative_eq!(1.0 + proposal.increment, (-0.1_f64).exp(), epsilon = 1e-6);
        assert!(proposal.next_step.is_some());
    }

    #[test]
    fn constant_derivative_integrates_exactly() {
        let field = EquationSet::new().with_equation(|_t, _y| 1.0);
        let proposal = propose_from(&field, &[0.0], 0.0, 0.5, 1e-3);

        assert_relative_eq!(proposal.increment, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn coupled_system_has_a_live_error_estimate() {
        // Every stage of y1 reads the shifted y0, so the two embedded
        // solutions differ and the error estimate constrains the step.
        let oscillator = EquationSet::new()
            .with_equation(|_t, y| y[1])
            .with_equation(|_t, y| -y[0]);
        let mut stages = Stages::default();
        evaluate(&oscillator, &mut stages, 0.0, 0.1, &[1.0, 0.0]);

        let y0 = propose(stages.row(0), 0.1, 1e-6);
        let y1 = propose(stages.row(1), 0.1, 1e-6);

        assert_relative_eq!(1.0 + y0.increment, 0.1_f64.cos(), epsilon = 1e-8);
        assert_relative_eq!(y1.increment, -(0.1_f64.sin()), epsilon = 1e-6);
        assert!(y1.next_step.is_some_and(|h| h.is_finite() && h > 0.0));
    }

    #[test]
    fn zero_error_means_no_constraint() {
        assert_eq!(next_step_size(0.1, 0.0, 1e-3), None);
    }

    #[test]
    fn non_finite_error_means_no_constraint() {
        assert_eq!(next_step_size(0.1, f64::NAN, 1e-3), None);
        assert_eq!(next_step_size(0.1, 1e-320, 1.0e300), None);
    }

    #[test]
    fn scale_follows_quarter_power_rule() {
        // (tol / (2·|R|))^(1/4) = (1e-3 / 2e-7)^(1/4) = 5000^(1/4)
        let h = next_step_size(0.01, -1e-7, 1e-3).expect("finite");
        assert_relative_eq!(h, 0.01 * 5000.0_f64.powf(0.25), epsilon = 1e-15);

        // The sign of the step is preserved for backward integration.
        let h = next_step_size(-0.01, 1e-7, 1e-3).expect("finite");
        assert_relative_eq!(h, -0.01 * 5000.0_f64.powf(0.25), epsilon = 1e-15);
    }

    #[test]
    fn larger_error_recommends_smaller_step() {
        let loose = next_step_size(0.1, 1e-9, 1e-3).expect("finite");
        let tight = next_step_size(0.1, 1e-5, 1e-3).expect("finite");
        assert!(tight < loose);
    }
}
