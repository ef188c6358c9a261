//! Interval narrowing driven by a pluggable probe placement policy.
//!
//! # Algorithm
//!
//! A bracketing search keeps an interval `[left, right]` and two interior
//! probes. Each iteration compares the probe objectives and discards the
//! part of the interval beyond the worse probe: if the left probe is no
//! worse, the right bound moves to the right probe; otherwise the left bound
//! moves to the left probe. The surviving probe keeps its evaluation, so
//! every iteration costs exactly one new evaluation.
//!
//! Where the probes go and when to stop is decided by a [`Policy`].
//! [`golden_section`](crate::golden_section) and
//! [`fibonacci`](crate::fibonacci) are both policies run by [`minimize`],
//! and callers can supply their own.
//!
//! # Result
//!
//! The solver returns the midpoint of its current interval as
//! [`Solution::x`] and the best evaluated probe as [`Solution::best`]. This
//! holds on convergence and when an observer stops the search, including
//! during the two starting probes, when the interval is still the original.
//!
//! # Observer Events
//!
//! The two starting probes are reported with [`Step::Initial`] and every
//! later probe with [`Policy::step`].

mod policy;
mod search;


pub use policy::Policy;

use unimin_core::{Objective, Observer};

use crate::{
    Action, Error, Event, Interval, Solution, Status, Step,
    evaluate::{EvalContext, Outcome},
};

use search::State;

/// Finds the minimum of the objective by narrowing `interval` with `policy`.
///
/// If the policy already considers `interval` converged, the midpoint is
/// evaluated once and returned without probing.
///
/// # Errors
///
/// Returns an error if the objective fails or returns NaN, or
/// [`Error::NonConvergence`] if `max_iters` narrowing steps do not satisfy
/// the policy.
pub fn minimize<F, P, Obs>(
    objective: &F,
    interval: Interval,
    mut policy: P,
    max_iters: usize,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    P: Policy,
    Obs: Observer<Event, Action>,
{
    let mut ctx = EvalContext::new(objective, observer);
    let bounds = interval.bounds();
    let [left, right] = bounds;

    if policy.is_converged(left, right) {
        let (status, best) = match ctx.eval(interval.midpoint(), 0, bounds, Step::Initial)? {
            Outcome::Continue(point) => (Status::Converged, point),
            Outcome::Stop(point) => (Status::StoppedByObserver, point),
        };
        return Ok(Solution {
            status,
            x: best.x,
            best,
            iters: 0,
            evals: ctx.evals(),
        });
    }

    let inner_left = match ctx.eval(policy.probe_left(left, right), 0, bounds, Step::Initial)? {
        Outcome::Continue(point) => point,
        Outcome::Stop(point) => {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: interval.midpoint(),
                best: point,
                iters: 0,
                evals: ctx.evals(),
            });
        }
    };

    let (inner_right, stopped) =
        match ctx.eval(policy.probe_right(left, right), 0, bounds, Step::Initial)? {
            Outcome::Continue(point) => (point, false),
            Outcome::Stop(point) => (point, true),
        };

    let mut state = State::new(interval, inner_left, inner_right);
    if stopped {
        return Ok(state.into_solution(Status::StoppedByObserver, 0, ctx.evals()));
    }

    let step = policy.step();
    let mut iters = 0;

    loop {
        if iters >= max_iters {
            return Err(Error::NonConvergence {
                iters,
                x: state.midpoint(),
                width: state.width(),
            });
        }

        let direction = state.shrink();
        policy.advance();
        iters += 1;

        let [left, right] = state.bounds();
        if policy.is_converged(left, right) {
            return Ok(state.into_solution(Status::Converged, iters, ctx.evals()));
        }

        let x = state.next_probe(direction, &policy);
        match ctx.eval(x, iters, [left, right], step)? {
            Outcome::Continue(point) => state.apply(direction, point),
            Outcome::Stop(point) => {
                state.apply(direction, point);
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
pub fn minimize_unobserved<F, P>(
    objective: &F,
    interval: Interval,
    policy: P,
    max_iters: usize,
) -> Result<Solution, Error>
where
    F: Objective,
    P: Policy,
{
    minimize(objective, interval, policy, max_iters, ())
}
