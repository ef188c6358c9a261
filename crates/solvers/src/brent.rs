//! Brent's method for bounded scalar minimization.
//!
//! # Algorithm
//!
//! Brent's method keeps a bracket `[a, c]` and three samples: the best point
//! `x`, the second best `w`, and `v`, the previous value of `w`. Each
//! iteration tries to jump to the vertex of the parabola through `v`, `x`,
//! `w`. The parabolic step is accepted only if it lands inside the bracket
//! and moves less than half the step taken two iterations earlier;
//! otherwise the solver takes a golden section step into the larger
//! segment. Steps shorter than the tolerance are lengthened to it, so no
//! two evaluations are closer than `tol`.
//!
//! Near a smooth minimum the parabolic steps converge superlinearly, while
//! the golden section fallback guarantees the bracket keeps shrinking.
//!
//! # Tolerance
//!
//! With `epsilon` from the [`Config`], the per-iteration tolerance is
//! `tol = epsilon * |x| + epsilon / 10` and the search stops once
//! `|x - mid| + (c - a) / 2 <= 2 * tol`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation: [`Step::Initial`] for the
//! starting golden section point, then [`Step::Parabolic`] or
//! [`Step::Golden`] depending on which step was taken.
//!
//! [`Event`]: crate::Event

pub mod parabola;

mod state;


pub use crate::Config;

use unimin_core::{Objective, Observer};

use crate::{
    Action, Error, Event, Interval, Solution, Status, Step,
    evaluate::{EvalContext, Outcome},
};

use state::State;

/// The golden section fraction `K = (3 - √5) / 2`.
pub(crate) const K: f64 = 0.381_966_011_250_105_1;

/// Finds the minimum of the objective on `interval` using Brent's method.
///
/// The observer receives an [`Event`] for every evaluation and may stop the
/// search early.
///
/// # Errors
///
/// Returns an error if the objective fails or returns NaN, or
/// [`Error::NonConvergence`] if `config.max_iters()` is reached.
pub fn minimize<F, Obs>(
    objective: &F,
    interval: Interval,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    Obs: Observer<Event, Action>,
{
    let mut ctx = EvalContext::new(objective, observer);
    let epsilon = config.epsilon();

    let start = interval.left() + K * interval.width();
    let first = match ctx.eval(start, 0, interval.bounds(), Step::Initial)? {
        Outcome::Continue(point) => point,
        Outcome::Stop(point) => {
            return Ok(State::new(interval, point).into_solution(
                Status::StoppedByObserver,
                0,
                ctx.evals(),
            ));
        }
    };

    let mut state = State::new(interval, first);
    let mut iters = 0;

    loop {
        let tol = state.tolerance(epsilon);
        if state.is_converged(tol) {
            return Ok(state.into_solution(Status::Converged, iters, ctx.evals()));
        }
        if iters == config.max_iters() {
            return Err(Error::NonConvergence {
                iters,
                x: state.best().x,
                width: state.width(),
            });
        }

        let bracket = state.bracket();
        let (u, step) = state.next_probe(tol);
        iters += 1;

        match ctx.eval(u, iters, bracket, step)? {
            Outcome::Continue(point) => state.update(point),
            Outcome::Stop(point) => {
                state.update(point);
                return Ok(state.into_solution(Status::StoppedByObserver, iters, ctx.evals()));
            }
        }
    }
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the objective fails or returns NaN, or if the
/// iteration limit is reached.
pub fn minimize_unobserved<F: Objective>(
    objective: &F,
    interval: Interval,
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, interval, config, ())
}
