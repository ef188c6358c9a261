use tracing::debug;
use unimin_core::Observer;
use unimin_solvers::{Action, Event};

/// Logs every evaluation as a `DEBUG` level [`tracing`] event.
///
/// Each record carries the fields `solver`, `iter`, `x`, `objective`,
/// `left`, `right` and `step`. Installing a subscriber is up to the caller.
/// Never stops the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracer {
    solver: &'static str,
}

impl Tracer {
    /// Creates a tracer that labels its records with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }
}

impl Observer<Event, Action> for Tracer {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        let [left, right] = event.bracket;
        debug!(
            solver = self.solver,
            iter = event.iter,
            x = event.x(),
            objective = event.objective(),
            left,
            right,
            step = ?event.step,
            "objective evaluated"
        );
        None
    }
}
