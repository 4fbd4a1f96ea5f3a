//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it for 3 things:
//!  - The support of the pdf of a [Distribution](crate::distribution_trait::Distribution)
//!     (see [Distribution::get_domain](crate::distribution_trait::Distribution::get_domain)).
//!  - The set of valid values for the parameters of a distribution.
//!  - The set of valid inputs of a quantile function ([PROBABILITY_DOMAIN]).
//!
//! All the sets we need are **open** intervals, so the bounds are never included.
//!

use core::fmt;

/// The inputs accepted by any quantile function: `(0.0, 1.0)`.
pub const PROBABILITY_DOMAIN: ContinuousDomain = ContinuousDomain::Range(0.0, 1.0);

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
///
/// The bounds are always **excluded**. NaNs are never contained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values stricly between the 2 numbers.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min < max`.
    Range(f64, f64),
    /// All the numbers stricly greater than the given value.
    From(f64),
    /// All the numbers stricly smaller than the given value.
    To(f64),
}

impl ContinuousDomain {
    /// Determines if `x` is inside the domain. A NaN is never inside.
    ///
    /// Infinities are only contained in [ContinuousDomain::Reals] (and in the
    /// unbounded side of [ContinuousDomain::From] and [ContinuousDomain::To]).
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if x.is_nan() {
            return false;
        }

        return match self {
            ContinuousDomain::Reals => true,
            ContinuousDomain::Range(min, max) => *min < x && x < *max,
            ContinuousDomain::From(min) => *min < x,
            ContinuousDomain::To(max) => x < *max,
        };
    }

    /// Same as [ContinuousDomain::contains] but also rejects `+-inf`.
    #[must_use]
    pub fn contains_finite(&self, x: f64) -> bool {
        return x.is_finite() && self.contains(x);
    }

    /// Returns the lower and upper bounds of the domain.
    ///
    /// The values can be `+-inf`. It is guaranteed that `return.0 < return.1`.
    #[must_use]
    pub const fn get_bounds(&self) -> (f64, f64) {
        return match *self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (min, max),
            ContinuousDomain::From(min) => (min, f64::INFINITY),
            ContinuousDomain::To(max) => (f64::NEG_INFINITY, max),
        };
    }
}

impl fmt::Display for ContinuousDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max): (f64, f64) = self.get_bounds();
        return write!(f, "({min}, {max})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_excluded() {
        assert!(!PROBABILITY_DOMAIN.contains(0.0));
        assert!(!PROBABILITY_DOMAIN.contains(1.0));
        assert!(PROBABILITY_DOMAIN.contains(0.5));
        assert!(PROBABILITY_DOMAIN.contains(f64::MIN_POSITIVE));

        let from_two: ContinuousDomain = ContinuousDomain::From(2.0);
        assert!(!from_two.contains(2.0));
        assert!(from_two.contains(2.0 + 1e-12));
        assert!(from_two.contains(f64::INFINITY));
        assert!(!from_two.contains_finite(f64::INFINITY));
    }

    #[test]
    fn nan_is_never_contained() {
        assert!(!ContinuousDomain::Reals.contains(f64::NAN));
        assert!(!ContinuousDomain::To(0.0).contains(f64::NAN));
        assert!(!PROBABILITY_DOMAIN.contains(f64::NAN));
    }

    #[test]
    fn display() {
        assert_eq!(ContinuousDomain::Range(-1.0, 1.0).to_string(), "(-1, 1)");
        assert_eq!(ContinuousDomain::From(2.0).to_string(), "(2, inf)");
    }
}
