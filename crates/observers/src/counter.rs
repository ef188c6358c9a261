use unimin_core::Observer;
use unimin_solvers::{Action, Event};

/// Counts objective evaluations and tracks the latest iteration.
///
/// Never stops the solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalCounter {
    evals: usize,
    iters: usize,
}

impl EvalCounter {
    /// Creates a counter with nothing counted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of evaluations observed.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }

    /// Returns the iteration of the latest evaluation observed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iters
    }
}

impl Observer<Event, Action> for EvalCounter {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.evals += 1;
        self.iters = event.iter;
        None
    }
}

/// Allows `&mut EvalCounter` to be passed to solvers that take an observer by
/// value, so the counts can be read after the solve completes.
impl Observer<Event, Action> for &mut EvalCounter {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}
