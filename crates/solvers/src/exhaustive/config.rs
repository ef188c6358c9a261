use crate::{ConfigError, config::positive};

/// Configuration for exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    coarse_step: f64,
    fine_step: f64,
    shrink: f64,
    max_evals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coarse_step: 1e-2,
            fine_step: 1e-8,
            shrink: 10.0,
            max_evals: 1_000_000,
        }
    }
}

impl Config {
    /// Creates a new config with validated step sizes.
    ///
    /// The first scan samples every `coarse_step`; refinement stops after a
    /// scan at `fine_step`. Shrink and evaluation cap keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if either step is not finite and positive.
    pub fn new(coarse_step: f64, fine_step: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            coarse_step: positive("coarse_step", coarse_step)?,
            fine_step: positive("fine_step", fine_step)?,
            ..Self::default()
        })
    }

    /// Sets the factor by which the step shrinks on each refinement.
    ///
    /// # Errors
    ///
    /// Returns an error unless `shrink` is finite and greater than one.
    pub fn with_shrink(self, shrink: f64) -> Result<Self, ConfigError> {
        if shrink.is_finite() && shrink > 1.0 {
            Ok(Self { shrink, ..self })
        } else {
            Err(ConfigError::InvalidShrink { value: shrink })
        }
    }

    /// Sets the maximum total number of objective evaluations.
    #[must_use]
    pub fn with_max_evals(self, max_evals: usize) -> Self {
        Self { max_evals, ..self }
    }

    /// Returns the step of the first scan.
    #[must_use]
    pub fn coarse_step(&self) -> f64 {
        self.coarse_step
    }

    /// Returns the step at which refinement stops.
    #[must_use]
    pub fn fine_step(&self) -> f64 {
        self.fine_step
    }

    /// Returns the step divisor applied per refinement.
    #[must_use]
    pub fn shrink(&self) -> f64 {
        self.shrink
    }

    /// Returns the maximum total number of objective evaluations.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }
}
