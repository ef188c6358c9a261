//! Golden section search for unimodal minimization.
//!
//! # Algorithm
//!
//! Golden section search places two interior probes at fractions
//! `1 - φ` and `φ` of the interval, where `φ = (√5 - 1) / 2`. After the
//! worse side is discarded, the surviving probe sits exactly where the next
//! interval needs one of its probes, so each iteration shrinks the interval
//! by `φ` for a single evaluation.
//!
//! The search stops once `right - left <= 2 * epsilon` and returns the
//! midpoint, which is then within `epsilon` of every point of the final
//! interval.
//!
//! # When to Use
//!
//! - The objective is unimodal on the interval
//! - Derivative information is unavailable
//! - A predictable, guaranteed rate of convergence matters more than speed
//!
//! For smooth objectives [`brent`](crate::brent) usually needs far fewer
//! evaluations.

mod policy;


pub use crate::Config;
pub use policy::GoldenSection;

use unimin_core::{Objective, Observer};

use crate::{Action, Error, Event, Interval, Solution, bracketing};

/// Finds the minimum of the objective using golden section search.
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
    let policy = GoldenSection::new(config.epsilon());
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
