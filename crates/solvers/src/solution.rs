use crate::Point;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a line search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the minimizer.
    ///
    /// Bracketing solvers report the midpoint of their current interval,
    /// which need not have been evaluated. This includes an early stop
    /// before any narrowing, where the interval is still the original one.
    /// Brent and exhaustive search report `best.x`.
    pub x: f64,

    /// The best evaluated point.
    pub best: Point,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Number of objective evaluations.
    pub evals: usize,
}
