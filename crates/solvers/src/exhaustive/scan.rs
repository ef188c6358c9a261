use unimin_core::{Objective, Observer};

use crate::{
    Action, Error, Event, Point, Step,
    evaluate::{EvalContext, Outcome},
};

/// Evenly spaced samples over `[left, right]`, the last one clamped to `right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Grid {
    left: f64,
    right: f64,
    step: f64,
    intervals: usize,
}

impl Grid {
    pub(super) fn new([left, right]: [f64; 2], step: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = ((right - left) / step).ceil() as usize;
        Self {
            left,
            right,
            step,
            intervals: intervals.max(1),
        }
    }

    /// Returns the number of samples.
    pub(super) fn len(&self) -> usize {
        self.intervals.saturating_add(1)
    }

    /// Returns the `i`th sample.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn x(&self, i: usize) -> f64 {
        if i >= self.intervals {
            self.right
        } else {
            (self.left + i as f64 * self.step).min(self.right)
        }
    }

    /// Returns the neighbours of sample `i`, or the bounds at either end.
    pub(super) fn bracket_around(&self, i: usize) -> [f64; 2] {
        let prev = if i == 0 { self.left } else { self.x(i - 1) };
        let next = if i >= self.intervals {
            self.right
        } else {
            self.x(i + 1)
        };
        [prev, next]
    }
}

/// The result of one complete scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Scan {
    pub(super) best: Point,
    pub(super) bracket: [f64; 2],
}

#[derive(Debug)]
pub(super) enum ScanOutcome {
    Complete(Scan),

    /// The observer stopped the scan; carries the best sample so far.
    Stopped(Point),
}

/// Evaluates every sample of `grid`, keeping the first strict minimum.
pub(super) fn scan<F, Obs>(
    ctx: &mut EvalContext<'_, F, Obs>,
    grid: &Grid,
    iter: usize,
) -> Result<ScanOutcome, Error>
where
    F: Objective,
    Obs: Observer<Event, Action>,
{
    let bounds = [grid.left, grid.right];
    let mut best_index = 0;
    let mut best = Point::new(grid.x(0), f64::INFINITY);

    for i in 0..grid.len() {
        let (point, stopped) = match ctx.eval(grid.x(i), iter, bounds, Step::Scan)? {
            Outcome::Continue(point) => (point, false),
            Outcome::Stop(point) => (point, true),
        };

        if i == 0 || point.objective < best.objective {
            best_index = i;
            best = point;
        }

        if stopped {
            return Ok(ScanOutcome::Stopped(best));
        }
    }

    Ok(ScanOutcome::Complete(Scan {
        best,
        bracket: grid.bracket_around(best_index),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn grid_clamps_last_sample_to_right_bound() {
        let grid = Grid::new([0.0, 1.0], 0.3);

        assert_eq!(grid.len(), 5);
        assert_relative_eq!(grid.x(0), 0.0);
        assert_relative_eq!(grid.x(3), 0.9);
        assert_eq!(grid.x(4), 1.0);
    }

    #[test]
    fn step_wider_than_interval_samples_both_ends() {
        let grid = Grid::new([2.0, 2.5], 10.0);

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.x(0), 2.0);
        assert_eq!(grid.x(1), 2.5);
    }

    #[test]
    fn bracket_falls_back_to_bounds_at_the_ends() {
        let grid = Grid::new([0.0, 1.0], 0.25);

        assert_eq!(grid.bracket_around(0), [0.0, 0.25]);
        assert_eq!(grid.bracket_around(2), [0.25, 0.75]);
        assert_eq!(grid.bracket_around(4), [0.75, 1.0]);
    }

    #[test]
    fn scan_keeps_first_strict_minimum() {
        let f = |x: f64| (x - 0.5).abs().max(0.25);
        let mut ctx = EvalContext::new(&f, ());
        let grid = Grid::new([0.0, 1.0], 0.125);

        let ScanOutcome::Complete(scan) = scan(&mut ctx, &grid, 0).unwrap() else {
            panic!("scan should complete");
        };

        // Samples 0.25 through 0.75 tie; the first one wins.
        assert_eq!(scan.best, Point::new(0.25, 0.25));
        assert_eq!(scan.bracket, [0.125, 0.375]);
        assert_eq!(ctx.evals(), 9);
    }

    #[test]
    fn stopped_scan_returns_best_so_far() {
        let f = |x: f64| (x - 0.2).powi(2);
        let mut count = 0;
        let observer = |_: &Event| {
            count += 1;
            (count == 4).then_some(Action::StopEarly)
        };
        let mut ctx = EvalContext::new(&f, observer);
        let grid = Grid::new([0.0, 1.0], 0.1);

        let outcome = scan(&mut ctx, &grid, 0).unwrap();

        assert!(matches!(outcome, ScanOutcome::Stopped(p) if p.x == 0.2));
    }
}
