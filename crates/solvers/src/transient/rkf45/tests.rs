use approx::assert_abs_diff_eq;
use runge_core::EquationSet;

use crate::transient::DimensionMismatch;

use super::{
    Action, Config, ConfigError, Error, Event, Status, component_step, solve, solve_unobserved,
};

fn decay() -> EquationSet {
    EquationSet::new().with_equation(|_t, y| -y[0])
}

/// y' = 20·cos(20t), whose error estimate stays active under loose bounds.
fn forced() -> EquationSet {
    EquationSet::new().with_equation(|t, _y| 20.0 * (20.0 * t).cos())
}

fn config(tolerance: f64) -> Config {
    Config::new(tolerance).expect("valid tolerance")
}

/// Collects `(step_size, next_step_size)` for every committed step.
fn step_sizes(field: &EquationSet, t0: f64, tf: f64, config: &Config) -> Vec<(f64, f64)> {
    let mut sizes = Vec::new();
    solve(field, &[0.0], t0, tf, config, |event: &Event<'_>| {
        if event.step > 0 {
            sizes.push((event.step_size, event.next_step_size));
        }
        None
    })
    .expect("should solve");
    sizes
}

#[test]
fn decay_tracks_exponential() {
    let solution =
        solve_unobserved(&decay(), &[1.0], 0.0, 1.0, &config(1e-6)).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.trajectory.len(), solution.steps + 1);
    assert_eq!(solution.evaluations, 6 * solution.steps);

    let times = solution.trajectory.times();
    let values = solution.trajectory.component(0).expect("one component");
    for (&t, &y) in times.iter().zip(values) {
        assert_abs_diff_eq!(y, (-t).exp(), epsilon = 1e-8);
    }
}

#[test]
fn trajectory_starts_at_initial_sample() {
    let solution =
        solve_unobserved(&decay(), &[2.5], 1.0, 2.0, &Config::default()).expect("should solve");

    assert_eq!(solution.trajectory.times()[0], 1.0);
    assert_eq!(solution.trajectory.state_at(0), Some(vec![2.5]));
}

#[test]
fn final_time_reaches_end_of_span() {
    let bounds = Config::default().bounds(0.0, 1.0).expect("valid");
    let solution =
        solve_unobserved(&decay(), &[1.0], 0.0, 1.0, &Config::default()).expect("should solve");

    let (t, _) = solution.trajectory.last().expect("non-empty");
    assert!(t >= 1.0);
    assert!(t < 1.0 + bounds.max() + 1e-12);
}

#[test]
fn step_sizes_stay_within_bounds() {
    for tolerance in [1e-10, 1e-6, 1e-3, 1e-1, 10.0] {
        let config = config(tolerance);
        let bounds = config.bounds(0.0, 5.0).expect("valid");

        for (step_size, next_step_size) in step_sizes(&forced(), 0.0, 5.0, &config) {
            assert!(bounds.contains(step_size), "step {step_size} out of bounds");
            assert!(bounds.contains(next_step_size), "next {next_step_size} out of bounds");
        }
    }
}

#[test]
fn first_step_is_clamped_into_bounds() {
    // The default first step for [0, 1] is 0.01, below this minimum.
    let config = Config::default()
        .with_min_step_size(0.05)
        .and_then(|c| c.with_max_step_size(0.1))
        .expect("valid");

    let sizes = step_sizes(&forced(), 0.0, 1.0, &config);
    assert_abs_diff_eq!(sizes[0].0, 0.05);
}

#[test]
fn zero_error_falls_back_to_min_step() {
    // y' = 0 has an identically zero error estimate.
    let field = EquationSet::new().with_equation(|_t, _y| 0.0);
    let config = Config::default()
        .with_min_step_size(0.02)
        .and_then(|c| c.with_max_step_size(0.1))
        .expect("valid");

    for (step_size, next_step_size) in step_sizes(&field, 0.0, 1.0, &config) {
        assert_abs_diff_eq!(step_size, 0.02);
        assert_abs_diff_eq!(next_step_size, 0.02);
    }
}

#[test]
fn tighter_tolerance_takes_at_least_as_many_steps() {
    let loose = solve_unobserved(&forced(), &[0.0], 0.0, 5.0, &config(1e-2)).expect("loose");
    let tight = solve_unobserved(&forced(), &[0.0], 0.0, 5.0, &config(1e-6)).expect("tight");

    assert!(tight.steps >= loose.steps);
}

#[test]
fn backward_span_produces_decreasing_times() {
    let solution =
        solve_unobserved(&decay(), &[1.0], 0.0, -1.0, &config(1e-6)).expect("should solve");

    let times = solution.trajectory.times();
    assert!(times.windows(2).all(|w| w[1] < w[0]));
    assert!(times[times.len() - 1] <= -1.0);

    let values = solution.trajectory.component(0).expect("one component");
    for (&t, &y) in times.iter().zip(values) {
        assert_abs_diff_eq!(y, (-t).exp(), epsilon = 1e-7);
    }
}

#[test]
fn backward_step_sizes_are_negative_and_bounded() {
    let config = config(1e-6);
    let bounds = config.bounds(0.0, -5.0).expect("valid");

    for (step_size, next_step_size) in step_sizes(&forced(), 0.0, -5.0, &config) {
        assert!(step_size < 0.0 && next_step_size < 0.0);
        assert!(bounds.contains(step_size) && bounds.contains(next_step_size));
    }
}

#[test]
fn empty_span_returns_initial_sample() {
    let solution =
        solve_unobserved(&decay(), &[3.0], 2.0, 2.0, &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.trajectory.times(), &[2.0]);
}

#[test]
fn rejects_dimension_mismatch() {
    let error =
        solve_unobserved(&decay(), &[1.0, 2.0], 0.0, 1.0, &Config::default()).unwrap_err();

    assert_eq!(
        error,
        Error::DimensionMismatch(DimensionMismatch {
            equations: 1,
            initial_conditions: 2,
        })
    );
}

#[test]
fn rejects_non_finite_span() {
    let error =
        solve_unobserved(&decay(), &[1.0], f64::NAN, 1.0, &Config::default()).unwrap_err();
    assert!(matches!(error, Error::NonFiniteSpan { .. }));
}

#[test]
fn rejects_invalid_bounds_before_stepping() {
    let config = Config::default().with_max_step_size(1e-9).expect("valid");

    let mut events = 0;
    let result = solve(&decay(), &[1.0], 0.0, 1.0, &config, |_event: &Event<'_>| {
        events += 1;
        None
    });

    assert!(matches!(
        result,
        Err(Error::InvalidConfig(ConfigError::InvertedBounds { .. }))
    ));
    assert_eq!(events, 0);
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<'_>| (event.step >= 3).then_some(Action::StopEarly);

    let solution = solve(&decay(), &[1.0], 0.0, 1.0, &Config::default(), observer)
        .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 3);
    assert_eq!(solution.trajectory.len(), 4); // initial + 3 steps
}

#[test]
fn equation_order_does_not_change_the_result() {
    // The same oscillator with its equations listed in opposite order. Stages
    // are built for the whole system before anything is committed, so the
    // order of the equations cannot change the result.
    let forward = EquationSet::new()
        .with_equation(|_t, y| y[1])
        .with_equation(|_t, y| -y[0]);
    let swapped = EquationSet::new()
        .with_equation(|_t, y| -y[1])
        .with_equation(|_t, y| y[0]);

    let config = config(1e-6);
    let a = solve_unobserved(&forward, &[1.0, 0.0], 0.0, 1.0, &config).expect("forward");
    let b = solve_unobserved(&swapped, &[0.0, 1.0], 0.0, 1.0, &config).expect("swapped");

    assert_eq!(a.trajectory.times(), b.trajectory.times());
    assert_eq!(a.trajectory.component(0), b.trajectory.component(1));
    assert_eq!(a.trajectory.component(1), b.trajectory.component(0));
}

#[test]
fn coupled_error_estimate_follows_tolerance() {
    let oscillator = EquationSet::new()
        .with_equation(|_t, y| y[1])
        .with_equation(|_t, y| -y[0]);
    let run = |tolerance| {
        let solution = solve_unobserved(&oscillator, &[1.0, 0.0], 0.0, 1.0, &config(tolerance))
            .expect("should solve");
        let (t, y) = solution.trajectory.last().expect("non-empty");
        (solution.steps, (y[0] - t.cos()).hypot(y[1] + t.sin()))
    };

    let (loose_steps, loose_error) = run(1e-4);
    let (tight_steps, tight_error) = run(1e-14);

    assert!(tight_steps > loose_steps);
    assert!(tight_error < loose_error);
    assert!(loose_error < 1e-6);
}

#[test]
fn repeated_runs_are_identical() {
    let config = config(1e-5);
    let first = solve_unobserved(&forced(), &[0.0], 0.0, 2.0, &config).expect("first");
    let second = solve_unobserved(&forced(), &[0.0], 0.0, 2.0, &config).expect("second");

    assert_eq!(first.trajectory, second.trajectory);
}

#[test]
fn component_step_reports_unclamped_recommendation() {
    let step = component_step(&decay(), 0, 0.0, 0.1, 1e-3, &[1.0]);

    assert_abs_diff_eq!(1.0 + step.increment, (-0.1_f64).exp(), epsilon = 1e-6);
    let next = step.next_step_size.expect("non-zero error");
    assert!(next > 0.1);
}
