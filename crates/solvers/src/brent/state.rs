use crate::{Interval, Point, Solution, Status, Step};

use super::{K, parabola};

/// Brent search state.
///
/// The bracket `[a, c]` always contains `x`, `w` and `v`, and `x` is the
/// best sample seen so far. `d` is the length of the last step and `e` the
/// length of the step before it.
#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    a: f64,
    c: f64,
    x: f64,
    w: f64,
    v: f64,
    fx: f64,
    fw: f64,
    fv: f64,
    d: f64,
    e: f64,
}

impl State {
    /// Starts with `x = w = v` at the first evaluated point.
    pub(super) fn new(interval: Interval, first: Point) -> Self {
        let width = interval.width();
        Self {
            a: interval.left(),
            c: interval.right(),
            x: first.x,
            w: first.x,
            v: first.x,
            fx: first.objective,
            fw: first.objective,
            fv: first.objective,
            d: width,
            e: width,
        }
    }

    pub(super) fn best(&self) -> Point {
        Point::new(self.x, self.fx)
    }

    pub(super) fn bracket(&self) -> [f64; 2] {
        [self.a, self.c]
    }

    pub(super) fn width(&self) -> f64 {
        self.c - self.a
    }

    fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.c)
    }

    /// Mixed absolute/relative tolerance around the current best point.
    pub(super) fn tolerance(&self, epsilon: f64) -> f64 {
        epsilon * self.x.abs() + epsilon / 10.0
    }

    /// True once both bracket ends are within `2 * tol` of `x`.
    pub(super) fn is_converged(&self, tol: f64) -> bool {
        (self.x - self.midpoint()).abs() + 0.5 * self.width() <= 2.0 * tol
    }

    /// Chooses the next point to evaluate and records the step lengths.
    pub(super) fn next_probe(&mut self, tol: f64) -> (f64, Step) {
        let g = self.e;
        self.e = self.d;

        let mid = self.midpoint();
        let (mut u, step) = match self.parabolic_probe(tol, g, mid) {
            Some(u) => (u, Step::Parabolic),
            None => (self.golden_probe(mid), Step::Golden),
        };

        if (u - self.x).abs() < tol {
            u = self.x + (u - self.x).signum() * tol;
        }
        self.d = (u - self.x).abs();

        (u, step)
    }

    /// Vertex of the parabola through `v`, `x`, `w`, if it is safe to use.
    ///
    /// `g` is the step length from two iterations back.
    #[allow(clippy::float_cmp)]
    fn parabolic_probe(&self, tol: f64, g: f64, mid: f64) -> Option<f64> {
        let distinct = self.x != self.w
            && self.x != self.v
            && self.w != self.v
            && self.fx != self.fv
            && self.fx != self.fw
            && self.fv != self.fw;
        if !distinct {
            return None;
        }

        let u = parabola::vertex([
            Point::new(self.v, self.fv),
            Point::new(self.x, self.fx),
            Point::new(self.w, self.fw),
        ])?;

        if !(self.a <= u && u <= self.c && (u - self.x).abs() < 0.5 * g) {
            return None;
        }

        if u - self.a < 2.0 * tol || self.c - u < 2.0 * tol {
            return Some(self.x - (self.x - mid).signum() * tol);
        }

        Some(u)
    }

    /// Golden section step into the larger of `[a, x]` and `[x, c]`.
    fn golden_probe(&mut self, mid: f64) -> f64 {
        if self.x < mid {
            self.e = self.c - self.x;
            self.x + K * self.e
        } else {
            self.e = self.x - self.a;
            self.x - K * self.e
        }
    }

    /// Narrows the bracket around the new point and reorders `x`, `w`, `v`.
    #[allow(clippy::float_cmp)]
    pub(super) fn update(&mut self, point: Point) {
        let Point { x: u, objective: fu } = point;

        if fu <= self.fx {
            if u >= self.x {
                self.a = self.x;
            } else {
                self.c = self.x;
            }
            self.v = self.w;
            self.fv = self.fw;
            self.w = self.x;
            self.fw = self.fx;
            self.x = u;
            self.fx = fu;
        } else {
            if u >= self.x {
                self.c = u;
            } else {
                self.a = u;
            }
            if fu <= self.fw || self.w == self.x {
                self.v = self.w;
                self.fv = self.fw;
                self.w = u;
                self.fw = fu;
            } else if fu <= self.fv || self.v == self.x || self.v == self.w {
                self.v = u;
                self.fv = fu;
            }
        }
    }

    pub(super) fn into_solution(self, status: Status, iters: usize, evals: usize) -> Solution {
        Solution {
            status,
            x: self.x,
            best: self.best(),
            iters,
            evals,
        }
    }
}
