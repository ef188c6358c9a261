//! Exhaustive search with recursive refinement.
//!
//! # Algorithm
//!
//! The interval is sampled every `coarse_step`, with the last sample clamped
//! to the right bound. The lowest sample (the first one, on ties) and its two
//! neighbours form a new, smaller interval, which is scanned again with the
//! step divided by `shrink` but never below `fine_step`. Refinement stops
//! after a scan at `fine_step`, and the lowest sample seen is returned.
//! Steps no finer than the current interval are skipped, so an interval
//! narrower than `fine_step` costs a single scan of its two bounds.
//!
//! Exhaustive search makes no use of the objective's shape beyond comparing
//! samples, which makes it a robust but expensive reference for the other
//! solvers. Each refinement counts as one iteration.

mod config;
mod scan;

#[cfg(test)]
mod tests;

pub use config::Config;

use unimin_core::{Objective, Observer};

use crate::{Action, Error, Event, Interval, Point, Solution, Status, evaluate::EvalContext};

use scan::{Grid, ScanOutcome, scan};

/// Finds the minimum of the objective by scanning and refining.
///
/// The observer receives an [`Event`] for every sample.
///
/// # Errors
///
/// Returns an error if the objective fails or returns NaN, or
/// [`Error::NonConvergence`] if a scan would exceed `config.max_evals()`.
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
    let mut best: Option<Point> = None;
    let mut bounds = interval.bounds();
    let mut step = config.coarse_step();
    let mut iters = 0;

    loop {
        // A step at least as wide as the interval only samples its bounds.
        while step >= bounds[1] - bounds[0] && step > config.fine_step() {
            step = (step / config.shrink()).max(config.fine_step());
        }

        let grid = Grid::new(bounds, step);
        if ctx.evals().saturating_add(grid.len()) > config.max_evals() {
            return Err(Error::NonConvergence {
                iters,
                x: best.map_or_else(|| 0.5 * (bounds[0] + bounds[1]), |p| p.x),
                width: bounds[1] - bounds[0],
            });
        }

        let (found, status) = match scan(&mut ctx, &grid, iters)? {
            ScanOutcome::Complete(scan) => {
                bounds = scan.bracket;
                let status = (step <= config.fine_step()).then_some(Status::Converged);
                (scan.best, status)
            }
            ScanOutcome::Stopped(point) => (point, Some(Status::StoppedByObserver)),
        };

        let overall = best.map_or(found, |b| b.better(found));
        best = Some(overall);

        if let Some(status) = status {
            return Ok(Solution {
                status,
                x: overall.x,
                best: overall,
                iters,
                evals: ctx.evals(),
            });
        }

        step = (step / config.shrink()).max(config.fine_step());
        iters += 1;
    }
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the objective fails or returns NaN, or if the
/// evaluation limit is reached.
pub fn minimize_unobserved<F: Objective>(
    objective: &F,
    interval: Interval,
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, interval, config, ())
}
