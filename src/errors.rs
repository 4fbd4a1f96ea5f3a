use thiserror::Error;

use crate::domain::ContinuousDomain;

/// Everything that can go wrong in this library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkewStudentError {
    /// A parameter of a distribution was outside of its domain (or was a NaN / `+-inf`).
    /// The distribution was **not** created.
    #[error("The parameter `{name}` = {value} is not valid, it must be inside {domain}. ")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value we received.
        value: f64,
        /// The set of values that would have been accepted.
        domain: ContinuousDomain,
    },
    /// A quantile function was evaluated outside of `(0.0, 1.0)`.
    ///
    /// `index` is the position of the first offending element (in logical, row-major,
    /// order for arrays). For a single value it is always `0`.
    #[error(
        "The quantile function was evaluated at {value} (position {index}), but it is only defined for probabilities in (0, 1). "
    )]
    OutOfDomain { index: usize, value: f64 },
    /// A parameter vector (see [Parametric](crate::distribution_trait::Parametric))
    /// had less values than the distribution needs.
    #[error("Expected {expected} parameters but only {found} were given. ")]
    WrongNumberOfParameters { expected: u16, found: usize },
    /// The data given to [Samples](crate::Samples::Samples) was empty or contained
    /// NaNs or infinities (`+-inf`).
    #[error("The samples must be non-empty and can not contain NaNs or infinities. ")]
    InvalidSamples,
}
