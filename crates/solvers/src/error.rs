use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a line search.
#[derive(Debug, Error)]
pub enum Error {
    /// The iteration or evaluation cap was reached before convergence.
    ///
    /// `x` is the best estimate at the time the solver gave up.
    #[error("no convergence after {iters} iterations (x = {x}, bracket width = {width})")]
    NonConvergence { iters: usize, x: f64, width: f64 },

    /// The objective returned an error, which is passed through as the source.
    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    #[error("objective returned NaN at x = {x}")]
    NanObjective { x: f64 },
}
