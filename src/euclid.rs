//! Euclid contains uscefull math functions

use crate::configuration::integration::DEFAULT_INTEGRATION_STEPS;

/// Numerically integrates `func` over the whole real line.
///
/// To compute integrals over an infinite range, we perform a
/// [change of variable](https://en.wikipedia.org/wiki/Numerical_integration#Integrals_over_infinite_intervals):
///
/// ```text
/// integral {-inf -> inf} f(x) dx =
///     integral {-1 -> 1} f( t / (1-t^2) ) * (1 + t^2) / (1 - t^2)^2  dt
/// ```
///
/// and integrate the new function with the
/// [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// using `num_steps` points (rounded down to an odd number, at least 3).
///
/// `func` must decay fast enough at `+-inf` for the integral to exist. Non-finite
/// evaluations (overflows near the singularities at `t = +-1`) are taken as `0.0`.
pub fn numerical_integration_reals(func: impl Fn(f64) -> f64, num_steps: usize) -> f64 {
    // Simpson needs an even number of intervals
    let intervals: usize = {
        let n: usize = num_steps.max(3) - 1;
        n - (n & 1)
    };
    let step_length: f64 = 2.0 / intervals as f64;

    let mapped = |t: f64| -> f64 {
        let e: f64 = 1.0 - t * t;
        if e < f64::EPSILON {
            return 0.0;
        }
        let u: f64 = 1.0 / e;
        let v: f64 = 1.0 + t * t;
        let value: f64 = func(t * u) * v * u * u;
        if value.is_finite() { value } else { 0.0 }
    };

    // the bounds (`t = -1` and `t = 1`) are 0
    let mut accumulator: f64 = 0.0;
    for i in 1..intervals {
        let t: f64 = -1.0 + step_length * i as f64;
        let weight: f64 = if (i & 1) == 1 { 4.0 } else { 2.0 };
        accumulator += weight * mapped(t);
    }

    return accumulator * step_length / 3.0;
}

/// [numerical_integration_reals] with [DEFAULT_INTEGRATION_STEPS].
pub fn integrate_reals(func: impl Fn(f64) -> f64) -> f64 {
    return numerical_integration_reals(func, DEFAULT_INTEGRATION_STEPS);
}
