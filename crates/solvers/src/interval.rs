use thiserror::Error;

/// Errors that can occur when constructing an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    #[error("interval bounds must be finite, got [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },

    #[error("interval left bound {left} must be less than right bound {right}")]
    NotIncreasing { left: f64, right: f64 },

    #[error("interval width overflows for bounds [{left}, {right}]")]
    WidthOverflow { left: f64, right: f64 },
}

/// A closed search interval `[left, right]` with `left < right`.
///
/// Solvers narrow their own copy of the interval; it never grows.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Interval {
    left: f64,
    right: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// Reversed bounds are rejected, not swapped.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite, if `left >= right`,
    /// or if `right - left` overflows to infinity.
    pub fn new(left: f64, right: f64) -> Result<Self, IntervalError> {
        if !left.is_finite() || !right.is_finite() {
            return Err(IntervalError::NonFinite { left, right });
        }
        if left >= right {
            return Err(IntervalError::NotIncreasing { left, right });
        }
        if !(right - left).is_finite() {
            return Err(IntervalError::WidthOverflow { left, right });
        }
        Ok(Self { left, right })
    }

    /// Returns the left bound.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right bound.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([left, right]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(left, right)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        interval.bounds()
    }
}
