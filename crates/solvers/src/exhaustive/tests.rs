use approx::assert_relative_eq;
use unimin_core::Negate;

use crate::{Action, Error, Event, Interval, Status, Step};

use super::{Config, minimize, minimize_unobserved};

fn interval(left: f64, right: f64) -> Interval {
    Interval::new(left, right).expect("valid interval")
}

/// Dyadic steps keep every sample exact.
fn dyadic() -> Config {
    Config::new(0.5, 0.031_25)
        .and_then(|c| c.with_shrink(2.0))
        .expect("valid config")
}

#[test]
fn minimizes_shifted_parabola() {
    let solution = minimize_unobserved(
        &|x: f64| (x - 1.0).powi(2),
        interval(0.1, 2.5),
        &Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-7);
}

#[test]
fn minimizes_quartic() {
    let f = |x: f64| x.powi(4) - 3.0 * x.powi(2) + x;

    let solution =
        minimize_unobserved(&f, interval(0.1, 2.5), &Config::default()).expect("should converge");

    assert_relative_eq!(solution.x, 1.130_901_122_6, epsilon = 1e-6);
}

#[test]
fn refines_around_the_best_sample() {
    let mut scans = Vec::new();
    let observer = |event: &Event| {
        assert_eq!(event.step, Step::Scan);
        if scans.last() != Some(&(event.iter, event.bracket)) {
            scans.push((event.iter, event.bracket));
        }
        None
    };

    let solution = minimize(&|x: f64| (x - 1.3).powi(2), interval(0.0, 4.0), &dyadic(), observer)
        .expect("should converge");

    assert_eq!(
        scans,
        [
            (0, [0.0, 4.0]),
            (1, [1.0, 2.0]),
            (2, [1.0, 1.5]),
            (3, [1.125, 1.375]),
            (4, [1.25, 1.375]),
        ]
    );
    assert_eq!(solution.iters, 4);
    assert_eq!(solution.evals, 9 + 4 * 5);
    assert_eq!(solution.x, 1.3125);
}

#[test]
fn minimum_at_either_end() {
    let config = dyadic();

    let left = minimize_unobserved(&|x: f64| x, interval(0.0, 1.0), &config).unwrap();
    assert_eq!(left.x, 0.0);

    let right = minimize_unobserved(&|x: f64| -x, interval(0.0, 1.0), &config).unwrap();
    assert_eq!(right.x, 1.0);
}

#[test]
fn interval_below_fine_step_scans_bounds_once() {
    let tiny = interval(2.0, 2.0 + 1e-12);

    let solution = minimize_unobserved(&|x: f64| x, tiny, &Config::default())
        .expect("should converge immediately");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evals, 2);
    assert_eq!(solution.x, 2.0);
}

#[test]
fn coarse_steps_wider_than_interval_are_skipped() {
    let mut steps = Vec::new();
    let observer = |event: &Event| {
        if steps.last() != Some(&(event.iter, event.bracket)) {
            steps.push((event.iter, event.bracket));
        }
        None
    };

    // 0.5 and 0.25 cover [0, 0.25] in a single interval; scanning starts at 0.125.
    let solution = minimize(&|x: f64| (x - 0.1).powi(2), interval(0.0, 0.25), &dyadic(), observer)
        .expect("should converge");

    assert_eq!(
        steps,
        [(0, [0.0, 0.25]), (1, [0.0, 0.25]), (2, [0.0625, 0.1875])]
    );
    assert_eq!(solution.evals, 3 + 5 + 5);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.x, 0.093_75);
}

#[test]
fn maximizes_through_negation() {
    let solution = minimize_unobserved(
        &Negate(|x: f64| 1.0 - (x - 0.75).powi(2)),
        interval(0.0, 2.0),
        &dyadic(),
    )
    .expect("should converge");

    assert_eq!(solution.x, 0.75);
    assert_eq!(solution.best.objective, -1.0);
}

#[test]
fn evaluation_cap_stops_before_refinement() {
    let config = dyadic().with_max_evals(10);

    let result = minimize_unobserved(&|x: f64| (x - 1.3).powi(2), interval(0.0, 4.0), &config);

    match result {
        Err(Error::NonConvergence { iters, x, width }) => {
            assert_eq!(iters, 1);
            assert_eq!(x, 1.5);
            assert_eq!(width, 1.0);
        }
        other => panic!("expected non-convergence, got {other:?}"),
    }
}

#[test]
fn evaluation_cap_below_first_scan_evaluates_nothing() {
    let config = dyadic().with_max_evals(3);
    let mut evals = 0;
    let observer = |_: &Event| {
        evals += 1;
        None
    };

    let result = minimize(&|x: f64| x * x, interval(0.0, 4.0), &config, observer);

    match result {
        Err(Error::NonConvergence { iters, x, width }) => {
            assert_eq!(iters, 0);
            assert_eq!(x, 2.0);
            assert_eq!(width, 4.0);
        }
        other => panic!("expected non-convergence, got {other:?}"),
    }
    assert_eq!(evals, 0);
}

#[test]
fn observer_can_stop_mid_scan() {
    let mut count = 0;
    let observer = |_: &Event| {
        count += 1;
        (count == 3).then_some(Action::StopEarly)
    };

    let solution = minimize(&|x: f64| (x - 1.3).powi(2), interval(0.0, 4.0), &dyadic(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.evals, 3);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, 1.0);
}
