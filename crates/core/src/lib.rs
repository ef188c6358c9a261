//! Core traits for derivative-free one-dimensional minimization.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`]: a scalar function `f(x)` that solvers search over
//! - [`Fallible`]: adapts a closure returning `Result` into an [`Objective`]
//! - [`Negate`]: flips the sign of an objective so a minimizer maximizes
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Fallible, Negate, Objective};
pub use observer::Observer;
