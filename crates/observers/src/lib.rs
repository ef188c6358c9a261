//! Reusable observers for the unimin line-search solvers.
//!
//! Every solver in `unimin-solvers` reports each objective evaluation as an
//! [`Event`] and accepts any [`Observer`] of those events. This crate
//! provides the common ones:
//!
//! - [`EvalCounter`] counts evaluations and iterations
//! - [`History`] records every event
//! - [`EvalBudget`] stops a solver after a fixed number of evaluations
//! - [`Tracer`] logs every event through [`tracing`]
//!
//! Each observer is also implemented for `&mut Self`, so it can be lent to a
//! solver and inspected once the solve completes:
//!
//! ```
//! use unimin_observers::EvalCounter;
//! use unimin_solvers::{Interval, brent};
//!
//! let mut counter = EvalCounter::new();
//! let interval = Interval::new(0.0, 3.0).unwrap();
//!
//! let solution = brent::minimize(
//!     &|x: f64| (x - 2.0).powi(2),
//!     interval,
//!     &brent::Config::default(),
//!     &mut counter,
//! )
//! .unwrap();
//!
//! assert_eq!(counter.evals(), solution.evals);
//! ```
//!
//! Observers compose with closures, which is the way to combine several:
//!
//! ```
//! use unimin_core::Observer;
//! use unimin_observers::{EvalBudget, History};
//! use unimin_solvers::{Action, Event, Interval, Status, golden_section};
//!
//! let mut history = History::new();
//! let mut budget = EvalBudget::new(5);
//! let interval = Interval::new(-1.0, 1.0).unwrap();
//!
//! let solution = golden_section::minimize(
//!     &|x: f64| x * x,
//!     interval,
//!     &golden_section::Config::default(),
//!     |event: &Event| -> Option<Action> {
//!         history.observe(event);
//!         budget.observe(event)
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! assert_eq!(history.len(), 5);
//! ```
//!
//! [`Event`]: unimin_solvers::Event
//! [`Observer`]: unimin_core::Observer

mod budget;
mod counter;
mod history;
mod trace;

pub use budget::EvalBudget;
pub use counter::EvalCounter;
pub use history::History;
pub use trace::Tracer;
