//! Derivative-free line-search minimizers for unimodal functions.
//!
//! Every solver searches a closed [`Interval`] for the minimizer of an
//! [`Objective`], reports each evaluation to an [`Observer`] as an [`Event`],
//! and returns a [`Solution`] carrying the estimate and iteration count.
//!
//! # Solvers
//!
//! - [`brent`]: golden section hybridized with safeguarded parabolic
//!   interpolation; the usual first choice
//! - [`golden_section`]: fixed-ratio bracketing
//! - [`fibonacci`]: bracketing that terminates in a precomputed number of steps
//! - [`exhaustive`]: fixed-step scan with recursive refinement
//!
//! Golden section and Fibonacci search are both [`bracketing::Policy`]
//! implementations driven by [`bracketing::minimize`], which also accepts
//! caller-defined policies.
//!
//! [`Objective`]: unimin_core::Objective
//! [`Observer`]: unimin_core::Observer

mod config;
mod error;
mod evaluate;
mod event;
mod interval;
mod point;
mod solution;

pub mod bracketing;
pub mod brent;
pub mod exhaustive;
pub mod fibonacci;
pub mod golden_section;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event, Step};
pub use interval::{Interval, IntervalError};
pub use point::Point;
pub use solution::{Solution, Status};
