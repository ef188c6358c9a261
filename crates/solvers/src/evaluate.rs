use unimin_core::{Objective, Observer};

use crate::{Action, Error, Event, Point, Step};

/// What the solver should do after an evaluation.
#[derive(Debug)]
pub(crate) enum Outcome {
    Continue(Point),
    Stop(Point),
}

/// Evaluates the objective, counts evaluations, and notifies the observer.
pub(crate) struct EvalContext<'a, F, Obs> {
    objective: &'a F,
    observer: Obs,
    evals: usize,
}

impl<'a, F, Obs> EvalContext<'a, F, Obs>
where
    F: Objective,
    Obs: Observer<Event, Action>,
{
    pub(crate) fn new(objective: &'a F, observer: Obs) -> Self {
        Self {
            objective,
            observer,
            evals: 0,
        }
    }

    /// Returns the number of objective evaluations so far.
    pub(crate) fn evals(&self) -> usize {
        self.evals
    }

    /// Evaluates the objective at `x` and emits an [`Event`].
    ///
    /// # Errors
    ///
    /// Returns an error if the objective fails or returns NaN.
    pub(crate) fn eval(
        &mut self,
        x: f64,
        iter: usize,
        bracket: [f64; 2],
        step: Step,
    ) -> Result<Outcome, Error> {
        let objective = self
            .objective
            .evaluate(x)
            .map_err(|e| Error::Objective(Box::new(e)))?;
        self.evals += 1;

        if objective.is_nan() {
            return Err(Error::NanObjective { x });
        }

        let point = Point::new(x, objective);
        let event = Event {
            iter,
            point,
            bracket,
            step,
        };

        match self.observer.observe(&event) {
            Some(Action::StopEarly) => Ok(Outcome::Stop(point)),
            None => Ok(Outcome::Continue(point)),
        }
    }
}
