use unimin_core::Observer;
use unimin_solvers::{Action, Event};

/// Stops a solver once a fixed number of evaluations has been observed.
///
/// The evaluation that exhausts the budget is the last one the solver makes,
/// and the solver returns its best estimate with
/// [`Status::StoppedByObserver`](unimin_solvers::Status::StoppedByObserver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBudget {
    limit: usize,
    used: usize,
}

impl EvalBudget {
    /// Creates a budget of `limit` evaluations.
    ///
    /// A zero budget stops the solver after its first evaluation.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, used: 0 }
    }

    /// Returns the number of evaluations left before the solver is stopped.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.used)
    }
}

impl Observer<Event, Action> for EvalBudget {
    fn observe(&mut self, _event: &Event) -> Option<Action> {
        self.used += 1;
        (self.used >= self.limit).then_some(Action::StopEarly)
    }
}

/// Allows `&mut EvalBudget` to be passed to solvers that take an observer by
/// value.
impl Observer<Event, Action> for &mut EvalBudget {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}
