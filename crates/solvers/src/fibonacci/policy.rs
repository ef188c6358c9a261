use crate::{Interval, Step, bracketing::Policy};

/// Offset of the last probe pair from the midpoint, as a fraction of the width.
const PERTURBATION: f64 = 0.01;

/// Fibonacci probe placement for a specific interval and tolerance.
///
/// The policy counts down from index `n` to `1`, one step per narrowing, so
/// it is tied to the interval it was created for.
#[derive(Debug, Clone, PartialEq)]
pub struct Fibonacci {
    numbers: Vec<f64>,
    n: usize,
    k: usize,
}

impl Fibonacci {
    /// Creates a policy that narrows `interval` to roughly `epsilon`.
    #[must_use]
    pub fn new(interval: Interval, epsilon: f64) -> Self {
        let ratio = interval.width() / epsilon;

        let mut numbers = vec![1.0, 1.0];
        while numbers[numbers.len() - 1] < ratio {
            let next = numbers[numbers.len() - 1] + numbers[numbers.len() - 2];
            if !next.is_finite() {
                break;
            }
            numbers.push(next);
        }

        let n = numbers
            .iter()
            .position(|&f| f >= ratio)
            .unwrap_or(numbers.len() - 1);

        Self { numbers, n, k: n }
    }

    /// Returns the number of narrowing steps the search takes.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.n.saturating_sub(1)
    }

    /// Returns the current Fibonacci index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.k
    }

    fn fraction(&self, offset: usize) -> f64 {
        self.numbers[self.k - offset] / self.numbers[self.k]
    }
}

impl Policy for Fibonacci {
    fn is_converged(&self, _left: f64, _right: f64) -> bool {
        self.k <= 1
    }

    fn probe_left(&self, left: f64, right: f64) -> f64 {
        let width = right - left;
        match self.k {
            0 | 1 => left + 0.5 * width,
            2 => left + (0.5 - PERTURBATION) * width,
            _ => left + self.fraction(2) * width,
        }
    }

    fn probe_right(&self, left: f64, right: f64) -> f64 {
        let width = right - left;
        match self.k {
            0 | 1 => left + 0.5 * width,
            2 => left + (0.5 + PERTURBATION) * width,
            _ => left + self.fraction(1) * width,
        }
    }

    fn advance(&mut self) {
        self.k = self.k.saturating_sub(1);
    }

    fn step(&self) -> Step {
        Step::Fibonacci
    }
}
