use crate::{Interval, Point, Solution, Status};

use super::Policy;

/// Which bound a narrowing step moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ShrinkDirection {
    /// The right bound moved to the right probe; a new left probe is needed.
    ShrinkRight,

    /// The left bound moved to the left probe; a new right probe is needed.
    ShrinkLeft,
}

/// Bounds, the two evaluated interior probes, and the best point seen.
#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    left: f64,
    right: f64,
    inner_left: Point,
    inner_right: Point,
    best: Point,
}

impl State {
    pub(super) fn new(interval: Interval, inner_left: Point, inner_right: Point) -> Self {
        Self {
            left: interval.left(),
            right: interval.right(),
            inner_left,
            inner_right,
            best: inner_left.better(inner_right),
        }
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Discards the side beyond the worse probe.
    ///
    /// Ties shrink right. The surviving probe moves into the slot of the
    /// probe that became a bound, and the other slot is stale until
    /// [`State::apply`] fills it.
    pub(super) fn shrink(&mut self) -> ShrinkDirection {
        if self.inner_left.objective <= self.inner_right.objective {
            self.right = self.inner_right.x;
            self.inner_right = self.inner_left;
            ShrinkDirection::ShrinkRight
        } else {
            self.left = self.inner_left.x;
            self.inner_left = self.inner_right;
            ShrinkDirection::ShrinkLeft
        }
    }

    /// Returns where the missing probe goes after shrinking in `direction`.
    pub(super) fn next_probe<P: Policy>(&self, direction: ShrinkDirection, policy: &P) -> f64 {
        match direction {
            ShrinkDirection::ShrinkRight => policy.probe_left(self.left, self.right),
            ShrinkDirection::ShrinkLeft => policy.probe_right(self.left, self.right),
        }
    }

    /// Fills the probe slot emptied by the last shrink.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Point) {
        match direction {
            ShrinkDirection::ShrinkRight => self.inner_left = point,
            ShrinkDirection::ShrinkLeft => self.inner_right = point,
        }
        self.best = self.best.better(point);
    }

    pub(super) fn into_solution(self, status: Status, iters: usize, evals: usize) -> Solution {
        Solution {
            status,
            x: self.midpoint(),
            best: self.best,
            iters,
            evals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn state(left: Point, right: Point) -> State {
        State::new(Interval::new(0.0, 10.0).unwrap(), left, right)
    }

    #[test]
    fn better_left_probe_shrinks_right() {
        let mut state = state(Point::new(4.0, 1.0), Point::new(6.0, 2.0));

        assert_eq!(state.shrink(), ShrinkDirection::ShrinkRight);
        assert_eq!(state.bounds(), [0.0, 6.0]);
        assert_eq!(state.inner_right, Point::new(4.0, 1.0));
    }

    #[test]
    fn better_right_probe_shrinks_left() {
        let mut state = state(Point::new(4.0, 3.0), Point::new(6.0, 2.0));

        assert_eq!(state.shrink(), ShrinkDirection::ShrinkLeft);
        assert_eq!(state.bounds(), [4.0, 10.0]);
        assert_eq!(state.inner_left, Point::new(6.0, 2.0));
    }

    #[test]
    fn ties_shrink_right() {
        let mut state = state(Point::new(4.0, 1.0), Point::new(6.0, 1.0));
        assert_eq!(state.shrink(), ShrinkDirection::ShrinkRight);
    }

    #[test]
    fn apply_fills_missing_slot_and_tracks_best() {
        let mut state = state(Point::new(4.0, 1.0), Point::new(6.0, 2.0));

        let direction = state.shrink();
        state.apply(direction, Point::new(2.0, 0.5));

        assert_eq!(state.inner_left, Point::new(2.0, 0.5));
        assert_eq!(state.inner_right, Point::new(4.0, 1.0));

        let solution = state.into_solution(Status::Converged, 1, 3);
        assert_relative_eq!(solution.x, 3.0);
        assert_eq!(solution.best, Point::new(2.0, 0.5));
    }
}
