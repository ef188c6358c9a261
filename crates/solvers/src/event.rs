use crate::Point;

/// Actions an observer can take during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best estimate found so far.
    StopEarly,
}

/// How the solver chose the point it just evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// A starting point, evaluated before the first iteration.
    Initial,

    /// A golden section probe, including Brent's fallback step.
    Golden,

    /// The vertex of Brent's interpolating parabola.
    Parabolic,

    /// A probe placed by ratios of successive Fibonacci numbers.
    Fibonacci,

    /// A sample from an exhaustive fixed-step scan.
    Scan,
}

/// Emitted by every solver once per objective evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Iteration during which the point was evaluated (`0` before the first).
    pub iter: usize,

    /// The evaluated point.
    pub point: Point,

    /// The search bracket at the time of evaluation.
    pub bracket: [f64; 2],

    /// How the point was chosen.
    pub step: Step,
}

impl Event {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    /// Returns the objective value at the evaluated point.
    #[must_use]
    pub fn objective(&self) -> f64 {
        self.point.objective
    }

    /// Returns the bracket width at the time of evaluation.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
