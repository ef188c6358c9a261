//! Fibonacci search for unimodal minimization.
//!
//! # Algorithm
//!
//! Fibonacci search narrows the interval like golden section search, but
//! places its probes at ratios of consecutive Fibonacci numbers
//! (`F0 = F1 = 1`). With `n` the smallest index such that
//! `F_n >= width / epsilon`, the probes in step `k = n, n - 1, ..., 2` sit at
//! `F_{k-2} / F_k` and `F_{k-1} / F_k` of the current interval. The search
//! finishes after exactly `n - 1` narrowing steps with an interval of about
//! `width / F_n`, the smallest any search with the same number of
//! evaluations can guarantee.
//!
//! At `k = 2` both ratios are one half, so the final pair of probes is
//! separated by a small fraction of the interval instead of coinciding.
//!
//! The number of steps is fixed by `epsilon` and the interval, see
//! [`Fibonacci::steps`]. If it exceeds `config.max_iters()` the search
//! reports [`Error::NonConvergence`].

mod policy;

#[cfg(test)]
mod tests;

pub use crate::Config;
pub use policy::Fibonacci;

use unimin_core::{Objective, Observer};

use crate::{Action, Error, Event, Interval, Solution, bracketing};

/// Finds the minimum of the objective using Fibonacci search.
///
/// The observer receives an [`Event`] for each evaluation.
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
    let policy = Fibonacci::new(interval, config.epsilon());
    bracketing::minimize(objective, interval, policy, config.max_iters(), observer)
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
