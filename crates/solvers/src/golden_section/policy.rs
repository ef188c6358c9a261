use crate::{Step, bracketing::Policy};

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
const INV_PHI: f64 = PHI - 1.0;

/// Golden section probe placement.
///
/// Probes sit at `left + (1 - φ⁻¹) * width` and `left + φ⁻¹ * width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenSection {
    epsilon: f64,
}

impl GoldenSection {
    /// Creates a policy that stops once the interval is at most `2 * epsilon` wide.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Policy for GoldenSection {
    fn is_converged(&self, left: f64, right: f64) -> bool {
        right - left <= 2.0 * self.epsilon
    }

    fn probe_left(&self, left: f64, right: f64) -> f64 {
        left + (1.0 - INV_PHI) * (right - left)
    }

    fn probe_right(&self, left: f64, right: f64) -> f64 {
        left + INV_PHI * (right - left)
    }

    fn step(&self) -> Step {
        Step::Golden
    }
}
