use std::convert::Infallible;

/// A scalar objective `f(x)` searched over by the line-search solvers.
///
/// Objectives must be deterministic: the solvers re-evaluate at arbitrary
/// points in whatever order they choose and assume the same `x` always gives
/// the same value. On the search interval the function is assumed continuous
/// and unimodal.
///
/// Plain closures `Fn(f64) -> f64` implement this trait with
/// [`Infallible`] errors. Wrap a closure returning `Result` in [`Fallible`]
/// when evaluation can fail.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Each objective defines its own `Error` type. Solvers pass it through
    /// to the caller without retrying.
    fn evaluate(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapter for objectives that can fail.
///
/// ```
/// use unimin_core::{Fallible, Objective};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("log of non-positive value")]
/// struct Domain;
///
/// let f = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Domain) });
/// assert!(f.evaluate(1.0).is_ok());
/// assert!(f.evaluate(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

/// Adapter that negates the objective value.
///
/// Used to maximize with any of the minimizers.
#[derive(Debug, Clone, Copy)]
pub struct Negate<F>(pub F);

impl<F: Objective> Objective for Negate<F> {
    type Error = F::Error;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        self.0.evaluate(x).map(|v| -v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[derive(Debug, thiserror::Error)]
    #[error("negative input {0}")]
    struct NegativeInput(f64);

    #[test]
    fn closure_is_an_objective() {
        let f = |x: f64| (x - 1.0).powi(2);
        assert_relative_eq!(f.evaluate(3.0).unwrap(), 4.0);
    }

    #[test]
    fn fallible_passes_errors_through() {
        let f = Fallible(|x: f64| {
            if x < 0.0 {
                Err(NegativeInput(x))
            } else {
                Ok(x.sqrt())
            }
        });

        assert_relative_eq!(f.evaluate(4.0).unwrap(), 2.0);

        let err = f.evaluate(-2.0).unwrap_err();
        assert_eq!(err.to_string(), "negative input -2");
    }

    #[test]
    fn negate_objective_flips_sign() {
        let f = |x: f64| x * x - 2.0;

        let original = f.evaluate(1.0).unwrap();
        let negated = Negate(f).evaluate(1.0).unwrap();

        assert_relative_eq!(original, -1.0);
        assert_relative_eq!(negated, 1.0);
    }
}
