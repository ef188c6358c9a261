use approx::assert_relative_eq;

use crate::{Action, Error, Event, Interval, Status, Step, golden_section};

use super::{Config, Fibonacci, minimize, minimize_unobserved};

fn interval(left: f64, right: f64) -> Interval {
    Interval::new(left, right).expect("valid interval")
}

fn quartic(x: f64) -> f64 {
    x.powi(4) - 3.0 * x.powi(2) + x
}

#[test]
fn minimizes_shifted_parabola() {
    let config = Config::new(1e-7, 200).unwrap();

    let solution = minimize_unobserved(&|x: f64| (x - 1.0).powi(2), interval(0.1, 2.5), &config)
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-6);
}

#[test]
fn takes_exactly_the_precomputed_number_of_steps() {
    let config = Config::new(1e-7, 200).unwrap();
    let domain = interval(0.1, 2.5);
    let expected = Fibonacci::new(domain, config.epsilon()).steps();

    let solution = minimize_unobserved(&quartic, domain, &config).expect("should converge");

    assert_eq!(solution.iters, expected);
    assert_eq!(solution.evals, expected + 1);
}

#[test]
fn step_count_does_not_depend_on_the_objective() {
    let config = Config::new(1e-6, 200).unwrap();
    let domain = interval(-3.0, 3.0);

    let a = minimize_unobserved(&f64::exp, domain, &config).expect("should converge");
    let b = minimize_unobserved(&|x: f64| (x - 0.5).abs(), domain, &config)
        .expect("should converge");

    assert_eq!(a.iters, b.iters);
    assert_eq!(a.evals, b.evals);
}

#[test]
fn agrees_with_golden_section() {
    let config = Config::new(1e-7, 200).unwrap();
    let domain = interval(0.1, 2.5);

    let fibonacci = minimize_unobserved(&quartic, domain, &config).expect("should converge");
    let golden =
        golden_section::minimize_unobserved(&quartic, domain, &config).expect("should converge");

    assert_relative_eq!(fibonacci.x, golden.x, epsilon = 3e-7);
}

#[test]
fn final_interval_is_within_tolerance() {
    let config = Config::new(1e-3, 100).unwrap();
    let mut widths = Vec::new();
    let observer = |event: &Event| {
        widths.push(event.width());
        None
    };

    let solution = minimize(&|x: f64| (x - 0.3).powi(2), interval(0.0, 1.0), &config, observer)
        .expect("should converge");

    // The last probe pair straddles the midpoint, so the final interval is
    // at most 0.51 of the width the last probe was placed in.
    let last = widths[widths.len() - 1];
    assert!(0.51 * last <= 1.02e-3 + 1e-12);
    assert_relative_eq!(solution.x, 0.3, epsilon = 1e-3);
}

#[test]
fn tags_probes_as_fibonacci_steps() {
    let mut steps = Vec::new();
    let observer = |event: &Event| {
        steps.push(event.step);
        None
    };

    minimize(&quartic, interval(0.1, 2.5), &Config::default(), observer)
        .expect("should converge");

    assert_eq!(&steps[..2], &[Step::Initial, Step::Initial]);
    assert!(steps[2..].iter().all(|&step| step == Step::Fibonacci));
}

#[test]
fn wide_tolerance_returns_midpoint() {
    let config = Config::new(10.0, 100).unwrap();
    let domain = interval(0.0, 1.0);

    let solution = minimize_unobserved(&quartic, domain, &config).expect("should converge");

    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evals, 1);
    assert_relative_eq!(solution.x, 0.5);
}

#[test]
fn too_few_iterations_is_non_convergence() {
    let config = Config::new(1e-9, 10).unwrap();

    let result = minimize_unobserved(&quartic, interval(0.1, 2.5), &config);

    assert!(matches!(
        result,
        Err(Error::NonConvergence { iters: 10, .. })
    ));
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

    let solution = minimize(&quartic, interval(0.1, 2.5), &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.evals, 4);
}
