//! # Skewed Student T
//!
//! The [Skewed Student T distribution](https://doi.org/10.2307/2527081) of Hansen (1994)
//! is a continuous probability distribution with **zero mean and unit variance**
//! that generalizes the [Student T](crate::distributions::StudentT::StudentT)
//! with a skewness parameter. It is very common to model the innovations of
//! financial returns (GARCH-like models).
//!
//! ### Parameters
//!
//!  - `eta`: the degrees of freedom. Must be stricly greater than `2.0`. Lower
//!     values give heavier tails.
//!  - `lambda`: the skewness. Must be inside `(-1.0, 1.0)`. If `lambda = 0.0`
//!     the distribution is a Student T rescaled to have a variance of `1.0`
//!     (see [StudentT::new_standardized]).
//!
//! ### Definition
//!
//! From the parameters we derive 3 constants:
//!
//! ```text
//! c = gamma((eta+1)/2) / (sqrt(pi*(eta-2)) * gamma(eta/2))
//! a = 4 * lambda * c * (eta-2)/(eta-1)
//! b = sqrt(1 + 3*lambda^2 - a^2)
//! ```
//!
//! The pdf is made of 2 halves of (scaled) Student T densities glued at the
//! split point `x0 = -a/b`:
//!
//! ```text
//! pdf(x) = b*c*(1 + 1/(eta-2) * ((b*x+a)/(1-lambda))^2)^(-(eta+1)/2)    if x < x0
//! pdf(x) = b*c*(1 + 1/(eta-2) * ((b*x+a)/(1+lambda))^2)^(-(eta+1)/2)    if x0 <= x
//! ```
//!

use bon::Builder;
use statrs::function::gamma::ln_gamma;

use crate::{
    configuration::defaults::{DEFAULT_ETA, DEFAULT_LAMBDA},
    distribution_trait::{Distribution, Parametric},
    distributions::StudentT::StudentT,
    domain::ContinuousDomain,
    errors::SkewStudentError,
};

pub const SKEW_STUDENT_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

/// Valid values for the degrees of freedom `eta`.
pub const ETA_DOMAIN: ContinuousDomain = ContinuousDomain::From(2.0);

/// Valid values for the skewness `lambda`.
pub const LAMBDA_DOMAIN: ContinuousDomain = ContinuousDomain::Range(-1.0, 1.0);

/// Above this `|z|`, [SkewStudent::log_pdf] avoids computing `z^2`.
const LOG_PDF_BIG_Z: f64 = 1.0e100;

/// The parameters of a [SkewStudent], not yet validated.
///
/// It can be created with a builder. Every parameter that is not set
/// takes its deafult value (see [crate::configuration::defaults]):
///
/// ```
/// use SkewedStudent::distributions::SkewStudent::{SkewStudent, SkewStudentParams};
///
/// let params: SkewStudentParams = SkewStudentParams::builder().eta(5.0).build();
/// let distribution: SkewStudent = SkewStudent::from_params(params).unwrap();
/// assert_eq!(distribution.get_eta(), 5.0);
/// assert_eq!(distribution.get_lambda(), -0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct SkewStudentParams {
    /// Degrees of freedom. `2.0 < eta`
    #[builder(default = DEFAULT_ETA)]
    pub eta: f64,
    /// Skewness. `-1.0 < lambda < 1.0`
    #[builder(default = DEFAULT_LAMBDA)]
    pub lambda: f64,
}

impl Default for SkewStudentParams {
    fn default() -> Self {
        return SkewStudentParams {
            eta: DEFAULT_ETA,
            lambda: DEFAULT_LAMBDA,
        };
    }
}

/// A [Skewed Student T distribution](crate::distributions::SkewStudent).
///
/// Once created it is never modified, so it can be freely shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SkewStudent {
    eta: f64,
    lambda: f64,
    a: f64,
    b: f64,
    c: f64,
    /// `-a/b`
    split_point: f64,
    /// `sqrt(eta / (eta - 2))`
    t_scale: f64,
    /// The (non standardized) Student T with `eta` degrees of freedom.
    student_t: StudentT,
}

impl SkewStudent {
    /// Create a [SkewStudent] distribution.
    ///
    ///  - `eta` must be finite and stricly greater than `2.0`.
    ///  - `lambda` must be finite and inside `(-1.0, 1.0)`.
    ///
    /// Otherwise an [SkewStudentError::InvalidParameter] is returned.
    pub fn new(eta: f64, lambda: f64) -> Result<SkewStudent, SkewStudentError> {
        if !ETA_DOMAIN.contains_finite(eta) {
            return Err(SkewStudentError::InvalidParameter {
                name: "eta",
                value: eta,
                domain: ETA_DOMAIN,
            });
        }

        if !LAMBDA_DOMAIN.contains_finite(lambda) {
            return Err(SkewStudentError::InvalidParameter {
                name: "lambda",
                value: lambda,
                domain: LAMBDA_DOMAIN,
            });
        }

        let (a, b_squared, c): (f64, f64, f64) = Self::compute_constants(eta, lambda);
        if !(0.0 < b_squared) {
            // should not happen with valid parameters, but it is the
            // condition for the distribution to exist
            return Err(SkewStudentError::InvalidParameter {
                name: "lambda",
                value: lambda,
                domain: LAMBDA_DOMAIN,
            });
        }
        let b: f64 = b_squared.sqrt();

        let student_t: StudentT = StudentT::new(eta)?;

        tracing::debug!(eta, lambda, a, b, c, "created skewed Student T distribution");

        return Ok(SkewStudent {
            eta,
            lambda,
            a,
            b,
            c,
            split_point: -a / b,
            t_scale: (eta / (eta - 2.0)).sqrt(),
            student_t,
        });
    }

    /// Create a [SkewStudent] distribution from a [SkewStudentParams].
    ///
    /// Same conditions as [SkewStudent::new].
    pub fn from_params(params: SkewStudentParams) -> Result<SkewStudent, SkewStudentError> {
        return Self::new(params.eta, params.lambda);
    }

    /// Create a [SkewStudent] distribution from `[eta, lambda]`, the order used by
    /// [Parametric]. Extra values are ignored.
    fn from_slice(parameters: &[f64]) -> Result<SkewStudent, SkewStudentError> {
        let [eta, lambda, ..] = parameters else {
            return Err(SkewStudentError::WrongNumberOfParameters {
                expected: Self::number_of_parameters(),
                found: parameters.len(),
            });
        };
        return Self::new(*eta, *lambda);
    }

    /// Computes the constants `(a, b^2, c)` of the distribution.
    ///
    /// The parameters are **not** checked.
    #[must_use]
    pub fn compute_constants(eta: f64, lambda: f64) -> (f64, f64, f64) {
        /*
            c = gamma((eta+1)/2) / (sqrt(pi*(eta-2)) * gamma(eta/2))
            ln(c) = ln_gamma((eta+1)/2) - ln_gamma(eta/2) - 0.5*ln(pi*(eta-2))

            (The gamma function overflows for eta > ~340, the logarithm does not)
        */
        let ln_c: f64 = ln_gamma((eta + 1.0) * 0.5)
            - ln_gamma(eta * 0.5)
            - 0.5 * (core::f64::consts::PI * (eta - 2.0)).ln();
        let c: f64 = ln_c.exp();

        let a: f64 = 4.0 * lambda * c * (eta - 2.0) / (eta - 1.0);
        let b_squared: f64 = 1.0 + 3.0 * lambda * lambda - a * a;

        return (a, b_squared, c);
    }

    /// Returns the degrees of freedom `eta`.
    pub const fn get_eta(&self) -> f64 {
        return self.eta;
    }

    /// Returns the skewness `lambda`.
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    pub const fn get_a(&self) -> f64 {
        return self.a;
    }

    pub const fn get_b(&self) -> f64 {
        return self.b;
    }

    pub const fn get_c(&self) -> f64 {
        return self.c;
    }

    /// The point `x0 = -a/b` where the pdf changes from the left half to the right half.
    /// It is also the mode of the distribution.
    pub const fn get_split_point(&self) -> f64 {
        return self.split_point;
    }

    /// The probability `p0 = (1 - lambda)/2` of being at the left of the split point.
    pub const fn get_split_probability(&self) -> f64 {
        return 0.5 * (1.0 - self.lambda);
    }

    /// Returns the parameters as a [SkewStudentParams].
    pub const fn get_params(&self) -> SkewStudentParams {
        return SkewStudentParams {
            eta: self.eta,
            lambda: self.lambda,
        };
    }

    /// The scale of the half of the pdf that contains `x`.
    /// `x == x0` belongs to the right half. A NaN also goes to the right.
    #[inline]
    fn half_scale(&self, x: f64) -> f64 {
        return if x < self.split_point {
            1.0 - self.lambda
        } else {
            1.0 + self.lambda
        };
    }
}

impl Distribution for SkewStudent {
    fn pdf(&self, x: f64) -> f64 {
        // pdf(x) = b*c*(1 + 1/(eta-2) * ((b*x+a)/s)^2)^(-(eta+1)/2)
        let z: f64 = (self.b * x + self.a) / self.half_scale(x);
        let base: f64 = 1.0 + z * z / (self.eta - 2.0);
        let exponent: f64 = -(self.eta + 1.0) * 0.5;
        return self.b * self.c * base.powf(exponent);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &SKEW_STUDENT_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        /*
            y = (b*x+a)/s * sqrt(eta/(eta-2))

            x < x0:     cdf(x) = (1-lambda) * T(y)
            x0 <= x:    cdf(x) = (1-lambda)/2 + (1+lambda) * (T(y) - 1/2)
        */
        if x.is_nan() {
            return f64::NAN;
        }

        let s: f64 = self.half_scale(x);
        let y: f64 = (self.b * x + self.a) / s * self.t_scale;
        let t: f64 = self.student_t.cdf(y);

        return if x < self.split_point {
            (1.0 - self.lambda) * t
        } else {
            0.5 * (1.0 - self.lambda) + (1.0 + self.lambda) * (t - 0.5)
        };
    }

    fn quantile_unchecked(&self, p: f64) -> f64 {
        /*
            p0 = (1-lambda)/2

            p < p0:     ppf(p) = (1-lambda)/b * sqrt((eta-2)/eta) * T^-1(p/(1-lambda)) - a/b
            p0 <= p:    ppf(p) = (1+lambda)/b * sqrt((eta-2)/eta) * T^-1(1/2 + (p-p0)/(1+lambda)) - a/b

            For the right half we use T^-1(1/2 + d) = -T^-1(1/2 - d), and
            1/2 - (p-p0)/(1+lambda) = (1-p)/(1+lambda), so the upper tail
            keeps its precision when p is close to 1.
        */
        let scale: f64 = 1.0 / (self.b * self.t_scale);

        let quantile: f64 = if p < self.get_split_probability() {
            let s: f64 = 1.0 - self.lambda;
            s * scale * self.student_t.quantile_unchecked(p / s)
        } else {
            let s: f64 = 1.0 + self.lambda;
            -s * scale * self.student_t.quantile_unchecked((1.0 - p) / s)
        };

        return quantile + self.split_point;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn variance(&self) -> Option<f64> {
        return Some(1.0);
    }

    fn mode(&self) -> f64 {
        return self.split_point;
    }

    fn skewness(&self) -> Option<f64> {
        /*
            Jondeau & Rockinger (2003):

            m2 = 1 + 3*lambda^2
            m3 = 16*c*lambda*(1+lambda^2)*(eta-2)^2 / ((eta-1)*(eta-3))
            skewness = (m3 - 3*a*m2 + 2*a^3) / b^3
        */
        if self.eta <= 3.0 {
            return None;
        }

        let (a, b): (f64, f64) = (self.a, self.b);
        let m2: f64 = self.second_raw_moment();
        let m3: f64 = self.third_raw_moment();

        return Some((m3 - 3.0 * a * m2 + 2.0 * a * a * a) / (b * b * b));
    }

    fn kurtosis(&self) -> Option<f64> {
        /*
            m4 = 3*(eta-2)/(eta-4) * (1 + 10*lambda^2 + 5*lambda^4)
            kurtosis = (m4 - 4*a*m3 + 6*a^2*m2 - 3*a^4) / b^4
        */
        if self.eta <= 4.0 {
            return None;
        }

        let (a, b): (f64, f64) = (self.a, self.b);
        let lambda_sq: f64 = self.lambda * self.lambda;
        let m2: f64 = self.second_raw_moment();
        let m3: f64 = self.third_raw_moment();
        let m4: f64 = 3.0 * (self.eta - 2.0) / (self.eta - 4.0)
            * (1.0 + 10.0 * lambda_sq + 5.0 * lambda_sq * lambda_sq);

        let a_sq: f64 = a * a;
        let b_sq: f64 = b * b;
        return Some((m4 - 4.0 * a * m3 + 6.0 * a_sq * m2 - 3.0 * a_sq * a_sq) / (b_sq * b_sq));
    }

    fn log_pdf(&self, x: f64) -> f64 {
        /*
            ln(pdf(x)) = ln(b*c) - (eta+1)/2 * ln(1 + 1/(eta-2) * z^2)
            z = (b*x+a)/s

            For a big |z| (z^2 overflows) we use:
            ln(1 + z^2/(eta-2)) = 2*ln|z| + ln(1/(eta-2) + 1/z^2)
        */
        let z: f64 = (self.b * x + self.a) / self.half_scale(x);
        let log_base: f64 = if z.abs() < LOG_PDF_BIG_Z {
            (z * z / (self.eta - 2.0)).ln_1p()
        } else {
            let inv_z: f64 = 1.0 / z;
            2.0 * z.abs().ln() + (1.0 / (self.eta - 2.0) + inv_z * inv_z).ln()
        };
        return (self.b * self.c).ln() - (self.eta + 1.0) * 0.5 * log_base;
    }
}

impl SkewStudent {
    // Raw moments of the variable `b*X + a` (before the standardization).

    fn second_raw_moment(&self) -> f64 {
        return 1.0 + 3.0 * self.lambda * self.lambda;
    }

    fn third_raw_moment(&self) -> f64 {
        let eta: f64 = self.eta;
        let lambda: f64 = self.lambda;
        return 16.0 * self.c * lambda * (1.0 + lambda * lambda) * (eta - 2.0) * (eta - 2.0)
            / ((eta - 1.0) * (eta - 3.0));
    }
}

impl Parametric for SkewStudent {
    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// of a [SkewStudent] at point `x` with the given `parameters`.
    ///
    /// ### Parameters for SkewStudent:
    ///
    /// The skewed Student T has 2 parameters, in this order: `eta` and `lambda`.
    /// If they are not valid (see [SkewStudent::new]) or there are less than 2,
    /// NaN is returned.
    fn general_pdf(&self, x: f64, parameters: &[f64]) -> f64 {
        return match SkewStudent::from_slice(parameters) {
            Ok(distribution) => distribution.pdf(x),
            Err(_) => f64::NAN,
        };
    }

    fn number_of_parameters() -> u16 {
        2
    }

    fn get_parameters(&self, parameters: &mut [f64]) {
        parameters[0] = self.eta;
        parameters[1] = self.lambda;
    }

    /// The log-likelihood of `data` for the parameters `[eta, lambda]`.
    ///
    /// The constants of the distribution are only computed once. Returns an
    /// [SkewStudentError::InvalidParameter] if the parameters are not valid and
    /// [SkewStudentError::WrongNumberOfParameters] if there are less than 2.
    fn general_log_likelihood(
        &self,
        parameters: &[f64],
        data: &[f64],
    ) -> Result<f64, SkewStudentError> {
        let distribution: SkewStudent = SkewStudent::from_slice(parameters)?;
        return Ok(distribution.log_likelihood(data));
    }
}
