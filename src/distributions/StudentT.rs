//! # Student T
//!
//! The [Student T distribution](https://en.wikipedia.org/wiki/Student%27s_t-distribution#Probability_density_function)
//! is a continuous probability distribution.
//!
//! ### Parameters
//!
//! It has a single parameter, the degrees of freedom (usually denoted by the greek
//! letter `nu`).
//!  - The degrees of freedom is a stricly positive number (usually an integer).
//!  - If `nu` diverges to infinity, the distribution becomes a standard normal distribution.
//!
//! We also allow a `scale`, wich is only used by [StudentT::new_standardized]: a Student T
//! rescaled to have a variance of exactly `1.0` (this is the symmetric case of the
//! [SkewStudent](crate::distributions::SkewStudent::SkewStudent)).
//!
//! The cdf and the quantile function are the ones from [statrs].
//!

use statrs::{
    distribution::{Continuous, ContinuousCDF, StudentsT as StatrsStudentsT},
    function::{beta::ln_beta, gamma::digamma},
};

use crate::{
    configuration::quantile::{
        QUANTILE_NEWTON_ITERATIONS, QUANTILE_TAIL_ITERATIONS, QUANTILE_TAIL_MIN_BETA_ARGUMENT,
        QUANTILE_TAIL_THRESHOLD, QUANTILE_USE_NEWTONS_ITER,
    },
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::SkewStudentError,
};

pub const STUDENT_T_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

/// Valid degrees of freedom for [StudentT::new].
pub const DEGREES_OF_FREEDOM_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

/// Valid degrees of freedom for [StudentT::new_standardized] (the variance must exist).
pub const STANDARDIZED_DEGREES_OF_FREEDOM_DOMAIN: ContinuousDomain = ContinuousDomain::From(2.0);

#[derive(Debug, Clone, PartialEq)]
pub struct StudentT {
    degrees_of_freedom: f64,
    scale: f64,
    inner: StatrsStudentsT,
}

impl StudentT {
    /// Create a [StudentT] distribution.
    ///
    /// `degrees_of_freedom` determines how *normal* does the distribution look.
    ///  - Must be finite (no `+-inf` nor NaN)
    ///  - Must be stricly positive (`0.0 < degrees_of_freedom`)
    ///  - Altough we accept a float, `degrees_of_freedom` almost always is an integer.
    ///
    /// Otherwise an [SkewStudentError::InvalidParameter] is returned.
    pub fn new(degrees_of_freedom: f64) -> Result<StudentT, SkewStudentError> {
        if !DEGREES_OF_FREEDOM_DOMAIN.contains_finite(degrees_of_freedom) {
            return Err(SkewStudentError::InvalidParameter {
                name: "degrees_of_freedom",
                value: degrees_of_freedom,
                domain: DEGREES_OF_FREEDOM_DOMAIN,
            });
        }

        return Self::new_scaled(degrees_of_freedom, 1.0);
    }

    /// Create a [StudentT] distribution rescaled to have a variance of `1.0`.
    ///
    /// The scale is `sqrt((nu - 2) / nu)`, therefore `degrees_of_freedom` must be
    /// finite and stricly greater than `2.0`.
    ///
    /// Otherwise an [SkewStudentError::InvalidParameter] is returned.
    pub fn new_standardized(degrees_of_freedom: f64) -> Result<StudentT, SkewStudentError> {
        if !STANDARDIZED_DEGREES_OF_FREEDOM_DOMAIN.contains_finite(degrees_of_freedom) {
            return Err(SkewStudentError::InvalidParameter {
                name: "degrees_of_freedom",
                value: degrees_of_freedom,
                domain: STANDARDIZED_DEGREES_OF_FREEDOM_DOMAIN,
            });
        }

        let scale: f64 = ((degrees_of_freedom - 2.0) / degrees_of_freedom).sqrt();
        return Self::new_scaled(degrees_of_freedom, scale);
    }

    fn new_scaled(degrees_of_freedom: f64, scale: f64) -> Result<StudentT, SkewStudentError> {
        let inner: StatrsStudentsT = StatrsStudentsT::new(0.0, scale, degrees_of_freedom)
            .map_err(|_| SkewStudentError::InvalidParameter {
                name: "degrees_of_freedom",
                value: degrees_of_freedom,
                domain: DEGREES_OF_FREEDOM_DOMAIN,
            })?;

        return Ok(StudentT {
            degrees_of_freedom,
            scale,
            inner,
        });
    }

    /// Returns the degrees_of_freedom.
    pub const fn get_degrees_of_freedom(&self) -> f64 {
        return self.degrees_of_freedom;
    }

    /// Returns the scale. It is `1.0` unless the distribution was created with
    /// [StudentT::new_standardized].
    pub const fn get_scale(&self) -> f64 {
        return self.scale;
    }

    /// `ln(|t|)` of the power-law asymptote of the lower tail of the (unscaled) T:
    ///
    /// ```text
    /// cdf(t) ~= nu^(nu/2 - 1) * |t|^(-nu) / B(nu/2, 1/2)
    /// |t| ~= (p * nu * B(nu/2, 1/2) * nu^(-nu/2))^(-1/nu)
    /// ```
    ///
    /// It overestimates `|t|` when `p` is not in the tail.
    fn asymptotic_ln_abs_quantile(&self, p: f64) -> f64 {
        let dof: f64 = self.degrees_of_freedom;
        return -(p.ln() + dof.ln() + ln_beta(0.5 * dof, 0.5) - 0.5 * dof * dof.ln()) / dof;
    }

    /// Determines if the quantile of `p` (`0.0 < p <= 0.5`) is too far in the
    /// tail for [statrs]. Its `inverse_cdf` inverts the incomplete beta at
    /// `nu / (nu + t^2)`, wich loses all precision (or panics) when that is tiny.
    fn is_deep_tail(&self, p: f64) -> bool {
        if p < QUANTILE_TAIL_THRESHOLD {
            return true;
        }

        // ln(nu / t^2) < ln(QUANTILE_TAIL_MIN_BETA_ARGUMENT)
        let ln_beta_argument: f64 =
            self.degrees_of_freedom.ln() - 2.0 * self.asymptotic_ln_abs_quantile(p);
        return ln_beta_argument < QUANTILE_TAIL_MIN_BETA_ARGUMENT.ln();
    }

    /// Quantile for a tiny `p` (`0.0 < p <= 0.5`) without [statrs]'s `inverse_cdf`.
    ///
    /// Saturates to `-inf` if the quantile is not representable as a [f64].
    fn lower_tail_quantile(&self, p: f64) -> f64 {
        /*
            Start at the asymptote and use Newton's method on u = ln(-x),
            where ln(cdf(-e^u)) is almost linear:
                g(u) = ln(cdf(x)) - ln(p)
                g'(u) = x * pdf(x) / cdf(x)
            Everything is done with logarithms since the pdf underflows.
        */
        let ln_p: f64 = p.ln();
        let mut u: f64 = self.asymptotic_ln_abs_quantile(p) + self.scale.ln();

        for _ in 0..QUANTILE_TAIL_ITERATIONS {
            let x: f64 = -u.exp();
            if !x.is_finite() {
                break;
            }

            let cdf: f64 = self.inner.cdf(x);
            if !(0.0 < cdf) {
                // p is so small that even the cdf underflows
                break;
            }
            let ln_cdf: f64 = cdf.ln();

            let slope: f64 = -(self.inner.ln_pdf(x) + u - ln_cdf).exp();
            if !(slope < 0.0) {
                break;
            }

            let step: f64 = (ln_cdf - ln_p) / slope;
            if !step.is_finite() {
                break;
            }
            u = u - step;

            if step.abs() <= 4.0 * f64::EPSILON * u.abs().max(1.0) {
                break;
            }
        }

        return -u.exp();
    }
}

impl Distribution for StudentT {
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        return self.inner.pdf(x);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &STUDENT_T_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        return self.inner.cdf(x);
    }

    fn quantile_unchecked(&self, p: f64) -> f64 {
        // `q` is the probability of the nearest tail
        let lower: bool = p < 0.5;
        let q: f64 = if lower { p } else { 1.0 - p };
        if self.is_deep_tail(q) {
            let tail_quantile: f64 = self.lower_tail_quantile(q);
            return if lower { tail_quantile } else { -tail_quantile };
        }

        let mut quantile: f64 = self.inner.inverse_cdf(p);

        if !QUANTILE_USE_NEWTONS_ITER {
            return quantile;
        }

        // x_n+1 = x_n - (cdf(x_n) - p) / pdf(x_n)
        let mut error: f64 = self.inner.cdf(quantile) - p;
        for _ in 0..QUANTILE_NEWTON_ITERATIONS {
            let density: f64 = self.inner.pdf(quantile);
            if error == 0.0 || !(f64::EPSILON < density) {
                // pdf_q is essentially 0, skip this.
                break;
            }

            let candidate: f64 = quantile - error / density;
            if !candidate.is_finite() {
                break;
            }
            let candidate_error: f64 = self.inner.cdf(candidate) - p;
            if error.abs() <= candidate_error.abs() {
                break;
            }

            quantile = candidate;
            error = candidate_error;
        }

        return quantile;
    }

    fn expected_value(&self) -> Option<f64> {
        return if 1.0 < self.degrees_of_freedom {
            Some(0.0)
        } else {
            None
        };
    }

    fn variance(&self) -> Option<f64> {
        let dof: f64 = self.degrees_of_freedom;
        return if 2.0 < dof {
            Some(self.scale * self.scale * dof / (dof - 2.0))
        } else if 1.0 < dof {
            Some(f64::INFINITY)
        } else {
            // (dof <= 1)
            None
        };
    }

    fn mode(&self) -> f64 {
        0.0
    }

    fn median(&self) -> f64 {
        return 0.0;
    }

    fn skewness(&self) -> Option<f64> {
        if 3.0 < self.degrees_of_freedom {
            Some(0.0)
        } else {
            None
        }
    }

    fn kurtosis(&self) -> Option<f64> {
        return self.excess_kurtosis().map(|x| x + 3.0);
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        return if 4.0 < self.degrees_of_freedom {
            Some(6.0 / (self.degrees_of_freedom - 4.0))
        } else if 2.0 < self.degrees_of_freedom {
            Some(f64::INFINITY)
        } else {
            // (dof <= 2)
            None
        };
    }

    fn entropy(&self) -> f64 {
        /*
            h = (nu+1)/2 * (digamma((nu+1)/2) - digamma(nu/2))
                + ln(sqrt(nu) * B(nu/2, 1/2)) + ln(scale)
        */
        let dof: f64 = self.degrees_of_freedom;
        let half_dof: f64 = 0.5 * dof;
        let half_dof_plus: f64 = 0.5 * (dof + 1.0);

        return half_dof_plus * (digamma(half_dof_plus) - digamma(half_dof))
            + 0.5 * dof.ln()
            + ln_beta(half_dof, 0.5)
            + self.scale.ln();
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        return self.inner.ln_pdf(x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_degrees_of_freedom() {
        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-3.0).is_err());
        assert!(StudentT::new(f64::NAN).is_err());
        assert!(StudentT::new(f64::INFINITY).is_err());
        assert!(StudentT::new_standardized(2.0).is_err());
        assert!(StudentT::new(1.5).is_ok());
        assert!(StudentT::new_standardized(2.5).is_ok());
    }

    #[test]
    fn standardized_has_unit_variance() {
        for dof in [2.5, 5.0, 30.0] {
            let t: StudentT = StudentT::new_standardized(dof).unwrap();
            assert!((t.variance().unwrap() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn known_quantiles() {
        // classic table values
        let t: StudentT = StudentT::new(10.0).unwrap();
        assert!((t.quantile(0.975).unwrap() - 2.228138851986274).abs() < 1e-9);
        assert!((t.quantile(0.5).unwrap()).abs() < 1e-12);
        assert!((t.cdf(2.228138851986274) - 0.975).abs() < 1e-10);
    }

    #[test]
    fn quantile_round_trip() {
        let t: StudentT = StudentT::new(3.0).unwrap();
        for p in [1e-6, 0.01, 0.2, 0.5, 0.7, 0.99, 1.0 - 1e-6] {
            let q: f64 = t.quantile(p).unwrap();
            assert!((t.cdf(q) - p).abs() < 1e-10, "p: {p}, q: {q}");
        }
    }

    #[test]
    fn extreme_tail_quantiles() {
        // power-law tail: q = -(p * nu * B(nu/2, 1/2) * nu^(-nu/2))^(-1/nu)
        let t: StudentT = StudentT::new(3.0).unwrap();
        let q: f64 = t.quantile(1e-300).unwrap();
        assert!((q / -1.03311083604463e100 - 1.0).abs() < 1e-9, "q: {q}");

        for dof in [2.5, 5.0, 30.0] {
            let t: StudentT = StudentT::new(dof).unwrap();
            for p in [1e-300, 1e-100, 1e-30, 1e-16] {
                let q: f64 = t.quantile(p).unwrap();
                assert!(q.is_finite() && q < 0.0, "dof: {dof}, p: {p}, q: {q}");
                assert!((t.cdf(q) / p - 1.0).abs() < 1e-6, "dof: {dof}, p: {p}, q: {q}");
            }

            // as close to 1.0 as the tail allows
            let upper: f64 = t.quantile(1.0 - f64::EPSILON).unwrap();
            assert_eq!(upper, -t.quantile(f64::EPSILON).unwrap());
        }

        let t: StudentT = StudentT::new_standardized(5.0).unwrap();
        let p: f64 = 1e-50;
        assert!((t.cdf(t.quantile(p).unwrap()) / p - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tail_is_continuous_with_body() {
        // both sides of the switch agree
        let t: StudentT = StudentT::new(4.0).unwrap();
        let below: f64 = t.quantile(QUANTILE_TAIL_THRESHOLD * 0.999).unwrap();
        let above: f64 = t.quantile(QUANTILE_TAIL_THRESHOLD * 1.001).unwrap();
        assert!(below < above);
        assert!((below / above - 1.0).abs() < 1e-3);
    }

    #[test]
    fn nan_propagates() {
        let t: StudentT = StudentT::new(4.0).unwrap();
        assert!(t.pdf(f64::NAN).is_nan());
        assert!(t.cdf(f64::NAN).is_nan());
        assert!(t.quantile(f64::NAN).is_err());
    }
}
