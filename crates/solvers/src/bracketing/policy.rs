use crate::Step;

/// Decides where a bracketing search probes and when it stops.
///
/// Both probe methods receive the current bounds and must return a point
/// strictly inside them. After a narrowing step the driver keeps one old
/// probe and asks for the other, so a policy should place `probe_left`
/// left of the surviving probe and `probe_right` right of it.
///
/// # Example
///
/// Golden section probes with a relative stopping rule:
///
/// ```
/// use unimin_solvers::{Interval, Step, bracketing::{self, Policy}};
///
/// const INV_PHI: f64 = 0.618_033_988_749_895;
///
/// struct RelativeGolden {
///     rel_tol: f64,
/// }
///
/// impl Policy for RelativeGolden {
///     fn is_converged(&self, left: f64, right: f64) -> bool {
///         right - left <= self.rel_tol * left.abs().max(right.abs()).max(1.0)
///     }
///
///     fn probe_left(&self, left: f64, right: f64) -> f64 {
///         right - INV_PHI * (right - left)
///     }
///
///     fn probe_right(&self, left: f64, right: f64) -> f64 {
///         left + INV_PHI * (right - left)
///     }
///
///     fn step(&self) -> Step {
///         Step::Golden
///     }
/// }
///
/// let interval = Interval::new(0.0, 4.0).unwrap();
/// let policy = RelativeGolden { rel_tol: 1e-9 };
/// let solution =
///     bracketing::minimize_unobserved(&|x: f64| (x - 1.5).powi(2), interval, policy, 100)
///         .unwrap();
///
/// assert!((solution.x - 1.5).abs() < 1e-6);
/// ```
pub trait Policy {
    /// Returns `true` once `[left, right]` is narrow enough to stop.
    fn is_converged(&self, left: f64, right: f64) -> bool;

    /// Returns the left interior probe for `[left, right]`.
    fn probe_left(&self, left: f64, right: f64) -> f64;

    /// Returns the right interior probe for `[left, right]`.
    fn probe_right(&self, left: f64, right: f64) -> f64;

    /// Called once after every narrowing step.
    fn advance(&mut self) {}

    /// Tags the events for probes placed by this policy.
    fn step(&self) -> Step;
}
