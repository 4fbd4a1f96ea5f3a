//! This file contains the deafult values and other value choices used trough the library.
//!

/// Default parameters of a [SkewStudent](crate::distributions::SkewStudent::SkewStudent).
///
/// Used by [SkewStudentParams](crate::distributions::SkewStudent::SkewStudentParams)
/// (and its builder) for every parameter that is not explicitly set.
pub mod defaults {
    /// Degrees of freedom `eta`. Must be stricly greater than `2.0`.
    pub const DEFAULT_ETA: f64 = 10.0;

    /// Skewness `lambda`. Must be inside `(-1.0, 1.0)`. A slightly negative skew is the
    /// usual case for asset returns.
    pub const DEFAULT_LAMBDA: f64 = -0.1;
}

/// The library uses numerical integration in a few instances (such as the
/// [entropy](crate::distribution_trait::Distribution::entropy)). We integrate with
/// the [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// after mapping the real line to `(-1, 1)` with `x = t / (1 - t^2)`.
///
/// There are no perfect values that will work with every distribution. Increasing the
/// number of steps comes with an extra computational cost. This values are just a
/// mere recomendation.
pub mod integration {
    /// The number of subdivisions of `(-1, 1)` used to integrate over the whole real line.
    /// `(1 << 16) + 1 = 65 537`
    ///
    /// The `+ 1` is because odd numbers are better for Simpson's integration.
    pub const DEFAULT_INTEGRATION_STEPS: usize = (1 << 16) + 1;
}

/// Determines if a Newton's method iteration is used to polish the quantile
/// function of the [StudentT](crate::distributions::StudentT::StudentT).
///
/// It generally improves precision, but you may want to disable it
/// if it leads to errors. A step is only kept if it gets closer to the
/// target probability.
pub mod quantile {
    /// Polish the quantile with Newton's method.
    pub const QUANTILE_USE_NEWTONS_ITER: bool = true;

    /// Maximum number of Newton's iterations.
    pub const QUANTILE_NEWTON_ITERATIONS: usize = 3;

    /// Probabilities stricly below this value (deep in the lower tail) are not
    /// inverted with [statrs], wich loses precision (and can panic) there. Instead we
    /// start from the power-law asymptote of the tail and refine it.
    pub const QUANTILE_TAIL_THRESHOLD: f64 = 1.0e-15;

    /// Quantiles with `nu / (nu + t^2)` (estimated) below this value are also
    /// refined in the tail, whatever their probability.
    pub const QUANTILE_TAIL_MIN_BETA_ARGUMENT: f64 = 1.0e-10;

    /// Maximum number of iterations to refine a quantile in the tail.
    /// It usually converges in less than 10.
    pub const QUANTILE_TAIL_ITERATIONS: usize = 50;
}
