use thiserror::Error;

/// Configuration shared by the tolerance-driven solvers.
///
/// Used by [`brent`](crate::brent), [`golden_section`](crate::golden_section)
/// and [`fibonacci`](crate::fibonacci).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositiveTolerance { name: &'static str, value: f64 },

    #[error("shrink factor must be finite and greater than one, got {value}")]
    InvalidShrink { value: f64 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-8,
            max_iters: 500,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            epsilon: positive("epsilon", epsilon)?,
            max_iters,
        })
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Validates a tolerance that must be finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveTolerance { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_epsilon() {
        let config = Config::new(1e-7, 42).expect("valid config");
        assert_eq!(config.max_iters(), 42);
        assert!(config.epsilon() > 0.0);
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        for epsilon in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Config::new(epsilon, 10),
                Err(ConfigError::NonPositiveTolerance {
                    name: "epsilon",
                    ..
                })
            ));
        }
    }
}
