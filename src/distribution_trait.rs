//! This script contains the interfaces used to comunicate with the distributions.
//!
//! Every evaluation comes in 3 flavours, so the shape of the output always
//! matches the shape of the input:
//!  - A single value: `f64 -> f64` (ex: [Distribution::pdf])
//!  - A slice: `&[f64] -> Vec<f64>` (ex: [Distribution::pdf_multiple])
//!  - An [ndarray] of any dimension: `ArrayBase<S, D> -> Array<f64, D>`
//!     (ex: [Distribution::pdf_array])

use ndarray::{Array, ArrayBase, Data, Dimension, ShapeBuilder};
use rand::{Rng, distr::Open01};

use crate::{
    domain::{ContinuousDomain, PROBABILITY_DOMAIN},
    errors::SkewStudentError,
    euclid,
};

/// The trait for any continuous distribution.
///
/// None of the provided methods are guaranteed to work if the implemented [Distribution::pdf]
/// is NOT a [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must have a total area of 1 under the curve.
///
/// All the methods are pure: a distribution is never modified after it has been created,
/// so it can be shared between threads freely.
pub trait Distribution {
    //Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x`.
    ///
    /// A NaN input gives a NaN output.
    fn pdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates at wich points
    /// the pdf is non-zero. The returned domain should be constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function).
    ///
    /// A NaN input gives a NaN output.
    fn cdf(&self, x: f64) -> f64;

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function)
    /// without checking the input.
    ///
    /// `p` **must** be inside `(0.0, 1.0)`, otherwise the result is meaningless
    /// (and the implementation may panic). Use [Distribution::quantile] if you
    /// are not sure.
    fn quantile_unchecked(&self, p: f64) -> f64;

    /// Returns the [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// of the distribution if it exists.
    fn expected_value(&self) -> Option<f64>;

    /// Returns the [variance](https://en.wikipedia.org/wiki/Variance) of
    /// the distribution if it exists.
    fn variance(&self) -> Option<f64>;

    /// Returns the [mode](https://en.wikipedia.org/wiki/Mode_(statistics))
    /// of the distribution.
    fn mode(&self) -> f64;

    /// Returns the [skewness](https://en.wikipedia.org/wiki/Skewness)
    /// of the distribution if it exists.
    fn skewness(&self) -> Option<f64>;

    /// Returns the [kurtosis](https://en.wikipedia.org/wiki/Kurtosis)
    /// of the distribution if it exists.
    fn kurtosis(&self) -> Option<f64>;

    // Provided methods:

    /// The natural logarithm of [Distribution::pdf].
    ///
    /// The deafult implementation is just `self.pdf(x).ln()`. Override it if there
    /// is a more precise way (for example, far in the tails the pdf underflows to `0.0`).
    fn log_pdf(&self, x: f64) -> f64 {
        return self.pdf(x).ln();
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function).
    ///
    /// The quantile function is the inverse function of [Distribution::cdf].
    /// If `p` is not inside `(0.0, 1.0)` (this includes NaNs) an
    /// [SkewStudentError::OutOfDomain] is returned.
    fn quantile(&self, p: f64) -> Result<f64, SkewStudentError> {
        if !PROBABILITY_DOMAIN.contains(p) {
            return Err(SkewStudentError::OutOfDomain { index: 0, value: p });
        }

        return Ok(self.quantile_unchecked(p));
    }

    /// Samples the distribution at random with the thread-local generator
    /// ([rand::rng]).
    ///
    /// The method is [Inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling).
    /// If you need reproducible results, use [Distribution::sample_with].
    fn sample(&self) -> f64 {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        return self.sample_with(&mut rng);
    }

    /// Samples the distribution at random with the given generator.
    ///
    /// Generates a random uniform number in the open interval `(0.0, 1.0)` and
    /// evaluates the quantile function there.
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let uniform: f64 = rng.sample(Open01);
        return self.quantile_unchecked(uniform);
    }

    // Multiple variants.

    /// Evaluates [Distribution::pdf] at multiple points.
    fn pdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|x| self.pdf(*x)).collect::<Vec<f64>>()
    }

    /// Evaluates [Distribution::cdf] at multiple points.
    fn cdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|x| self.cdf(*x)).collect::<Vec<f64>>()
    }

    /// Evaluates [Distribution::quantile] at multiple points.
    ///
    /// If any of the points is not inside `(0.0, 1.0)`, an
    /// [SkewStudentError::OutOfDomain] with the position of the first invalid
    /// point is returned.
    fn quantile_multiple(&self, points: &[f64]) -> Result<Vec<f64>, SkewStudentError> {
        check_probabilities(points.iter())?;

        let ret: Vec<f64> = points
            .iter()
            .map(|p| self.quantile_unchecked(*p))
            .collect::<Vec<f64>>();
        return Ok(ret);
    }

    /// Generates `n` samples with the thread-local generator.
    fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        return self.sample_multiple_with(n, &mut rng);
    }

    /// Generates `n` samples with the given generator.
    fn sample_multiple_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        tracing::trace!(n, "sampling");
        (0..n).map(|_| self.sample_with(&mut *rng)).collect::<Vec<f64>>()
    }

    // Array variants.

    /// Evaluates [Distribution::pdf] at every element of `points`.
    /// The returned array has the same shape.
    fn pdf_array<S, D>(&self, points: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        points.mapv(|x| self.pdf(x))
    }

    /// Evaluates [Distribution::cdf] at every element of `points`.
    /// The returned array has the same shape.
    fn cdf_array<S, D>(&self, points: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        points.mapv(|x| self.cdf(x))
    }

    /// Evaluates [Distribution::quantile] at every element of `points`.
    /// The returned array has the same shape.
    ///
    /// If any of the points is not inside `(0.0, 1.0)`, an
    /// [SkewStudentError::OutOfDomain] with the position (in logical order)
    /// of the first invalid point is returned.
    fn quantile_array<S, D>(&self, points: &ArrayBase<S, D>) -> Result<Array<f64, D>, SkewStudentError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        check_probabilities(points.iter())?;
        return Ok(points.mapv(|p| self.quantile_unchecked(p)));
    }

    /// Generates an array of samples of the given `shape` with the thread-local generator.
    ///
    /// `shape` can be anything that [ndarray] accepts as a shape:
    /// `Ix0()` for a single value, `n` for a vector, `(rows, cols)`, `IxDyn(&[...])`...
    fn sample_array<Sh>(&self, shape: Sh) -> Array<f64, Sh::Dim>
    where
        Sh: ShapeBuilder,
    {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        return self.sample_array_with(shape, &mut rng);
    }

    /// Generates an array of samples of the given `shape` with the given generator.
    ///
    /// The array is filled in logical (row-major) order.
    fn sample_array_with<Sh, R>(&self, shape: Sh, rng: &mut R) -> Array<f64, Sh::Dim>
    where
        Sh: ShapeBuilder,
        R: Rng + ?Sized,
    {
        let ret: Array<f64, Sh::Dim> = Array::from_shape_simple_fn(shape, || self.sample_with(&mut *rng));
        tracing::trace!(shape = ?ret.shape(), "sampled array");
        return ret;
    }

    // Statistics

    /// Returns the [median](https://en.wikipedia.org/wiki/Median)
    /// of the distribution.
    fn median(&self) -> f64 {
        return self.quantile_unchecked(0.5);
    }

    /// Returns the [excess kurtosis](https://en.wikipedia.org/wiki/Kurtosis#Excess_kurtosis)
    /// of the distribution.
    ///
    /// The excess kurtosis is defined as `kurtosis - 3`.
    fn excess_kurtosis(&self) -> Option<f64> {
        return self.kurtosis().map(|x| x - 3.0);
    }

    /// Returns the [entropy](https://en.wikipedia.org/wiki/Information_entropy)
    /// of the distribution (in nats).
    ///
    /// The deafult implementation integrates numerically over the whole real line
    /// (see [euclid::integrate_reals]), wich may be expensive.
    fn entropy(&self) -> f64 {
        let log_fn = |x: f64| {
            let p: f64 = self.pdf(x);
            if 0.0 < p { p * p.ln() } else { 0.0 }
        };

        return -euclid::integrate_reals(log_fn);
    }

    /// The [log-likelihood](https://en.wikipedia.org/wiki/Likelihood_function#Log-likelihood)
    /// of the `data` under this distribution: the sum of [Distribution::log_pdf].
    fn log_likelihood(&self, data: &[f64]) -> f64 {
        data.iter().map(|x| self.log_pdf(*x)).sum::<f64>()
    }
}

/// A distribution whose pdf can be evaluated with any set of parameters, not
/// only with the ones it was created with.
///
/// This is the interface that an external fitting procedure (like maximum likelihood
/// estimation with some optimizer) needs.
pub trait Parametric {
    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x` with
    /// the given `parameters`.
    ///
    /// If follows the same constraits as the normal [Distribution::pdf]
    /// but also taking the parameters into account. If the parameters are not
    /// valid, NaN is returned.
    ///
    /// **Panicks** if `parameters` has less than [Parametric::number_of_parameters] elements.
    fn general_pdf(&self, x: f64, parameters: &[f64]) -> f64;

    /// Returns the number of parameters of the model.
    fn number_of_parameters() -> u16;

    /// Writes the parameters of `self` in `parameters`, in the same order that
    /// [Parametric::general_pdf] expects them.
    ///
    /// **Panicks** if `parameters` has less than [Parametric::number_of_parameters] elements.
    fn get_parameters(&self, parameters: &mut [f64]);

    /// The log-likelihood of `data` for the given `parameters`.
    ///
    /// Implementors should return an error if the parameters are not valid.
    /// The deafult implementation just adds the logarithm of [Parametric::general_pdf]
    /// at every point (so invalid parameters give a NaN).
    ///
    /// If `parameters` has less than [Parametric::number_of_parameters] elements,
    /// [SkewStudentError::WrongNumberOfParameters] is returned.
    fn general_log_likelihood(
        &self,
        parameters: &[f64],
        data: &[f64],
    ) -> Result<f64, SkewStudentError> {
        let expected: u16 = Self::number_of_parameters();
        if parameters.len() < usize::from(expected) {
            return Err(SkewStudentError::WrongNumberOfParameters {
                expected,
                found: parameters.len(),
            });
        }

        let log_likelihood: f64 = data
            .iter()
            .map(|x| self.general_pdf(*x, parameters).ln())
            .sum::<f64>();
        return Ok(log_likelihood);
    }
}

/// Returns an error with the position of the first value not inside `(0.0, 1.0)`.
fn check_probabilities<'a>(points: impl Iterator<Item = &'a f64>) -> Result<(), SkewStudentError> {
    for (index, &value) in points.enumerate() {
        if !PROBABILITY_DOMAIN.contains(value) {
            return Err(SkewStudentError::OutOfDomain { index, value });
        }
    }

    return Ok(());
}
