//! Compares the four line-search methods on one problem.
//!
//! Minimizes f(x) = x⁴ - 3x² + x on \[0.1, 2.5\] with a tolerance of 1e-7 and
//! prints each method's minimizer, iteration count and evaluation count.
//!
//! # Usage
//!
//! ```text
//! cargo run --example compare
//! ```

use std::error::Error;

use unimin_observers::EvalCounter;
use unimin_solvers::{Interval, Solution, brent, exhaustive, fibonacci, golden_section};

fn quartic(x: f64) -> f64 {
    x.powi(4) - 3.0 * x.powi(2) + x
}

fn main() -> Result<(), Box<dyn Error>> {
    let interval = Interval::new(0.1, 2.5)?;
    let config = brent::Config::new(1e-7, 500)?;
    let scan = exhaustive::Config::new(1e-2, 5e-8)?;

    let mut counter = EvalCounter::new();
    let runs: [(&str, Solution); 4] = [
        (
            "exhaustive",
            exhaustive::minimize(&quartic, interval, &scan, &mut counter)?,
        ),
        (
            "golden section",
            golden_section::minimize_unobserved(&quartic, interval, &config)?,
        ),
        (
            "fibonacci",
            fibonacci::minimize_unobserved(&quartic, interval, &config)?,
        ),
        ("brent", brent::minimize_unobserved(&quartic, interval, &config)?),
    ];

    println!("minimizing x^4 - 3x^2 + x on [0.1, 2.5]");
    println!(
        "{:<16} {:>14} {:>16} {:>6} {:>6}",
        "method", "x", "f(x)", "iters", "evals"
    );
    for (name, solution) in &runs {
        println!(
            "{:<16} {:>14.9} {:>16.12} {:>6} {:>6}",
            name,
            solution.x,
            quartic(solution.x),
            solution.iters,
            solution.evals
        );
    }

    println!(
        "exhaustive search observed {} evaluations over {} refinements",
        counter.evals(),
        counter.iters()
    );
    Ok(())
}
