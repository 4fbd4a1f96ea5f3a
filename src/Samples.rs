//! Data storage and the computation of its common statistics.
//!
//! [Samples] is mainly used to check that the draws of a distribution
//! (see [Distribution::sample_multiple](crate::distribution_trait::Distribution::sample_multiple))
//! have the moments they should have.

use crate::errors::SkewStudentError;

/// A non-empty collection of finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    // non-empty
    data: Vec<f64>,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleProperties {
    /// the average of the sample
    pub mean: Option<f64>,
    /// the (unbiased) variance of the sample
    ///
    /// Or None if `data.len() <= 1`
    pub variance: Option<f64>,
    /// the skewness of the sample
    pub skewness: Option<f64>,
    /// the excess kurtosis of the sample
    pub excess_kurtosis: Option<f64>,
    /// The maximum value of the sample
    pub maximum: Option<f64>,
    /// The minimum value of the sample
    pub minimum: Option<f64>,
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not be empty nor contain NaNs or infinities (`+-inf`),
    /// otherwise [SkewStudentError::InvalidSamples] is returned.
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples, SkewStudentError> {
        return Self::new_move(Vec::from(data));
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not be empty nor contain NaNs or infinities (`+-inf`),
    /// otherwise [SkewStudentError::InvalidSamples] is returned.
    pub fn new_move(data: Vec<f64>) -> Result<Samples, SkewStudentError> {
        let invalid_contained: bool = data.iter().any(|f: &f64| !f.is_finite());
        if invalid_contained || data.is_empty() {
            return Err(SkewStudentError::InvalidSamples);
        }

        return Ok(Samples {
            data,
            properties: SampleProperties::default(),
        });
    }

    /// Gives a reference to the contained data.
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Returns a reference to the internal field that contains
    /// all computed statistics ([SampleProperties]).
    pub fn peek_properties(&self) -> &SampleProperties {
        return &self.properties;
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean) and returns it.
    ///
    /// If the mean was already computed, it just returns the value
    /// stored in [SampleProperties] and the operation is constant time.
    pub fn mean(&mut self) -> f64 {
        if let Some(mean) = self.properties.mean {
            return mean;
        }

        let n: f64 = self.data.len() as f64;
        let mean: f64 = self.data.iter().sum::<f64>() / n;

        self.properties.mean = Some(mean);
        return mean;
    }

    /// Computes the (unbiased) sample [variance](https://en.wikipedia.org/wiki/Variance)
    /// and returns it.
    ///
    /// Returns [None] if there is only 1 sample.
    pub fn variance(&mut self) -> Option<f64> {
        if self.properties.variance.is_some() {
            return self.properties.variance;
        }

        let n: usize = self.data.len();
        if n < 2 {
            return None;
        }

        let mean: f64 = self.mean();
        let sum_squares: f64 = self
            .data
            .iter()
            .map(|&s| {
                let centered: f64 = s - mean;
                centered * centered
            })
            .sum::<f64>();

        let variance: f64 = sum_squares / (n as f64 - 1.0);
        self.properties.variance = Some(variance);
        return Some(variance);
    }

    /// Computes the sample [skewness](https://en.wikipedia.org/wiki/Skewness#Sample_skewness)
    /// and returns it.
    ///
    /// `Sk = n / ((n - 1) * (n - 2) * s^3) * sumatory[ (x_i - m)^3 ]`
    ///
    /// Returns [None] if there are less than 3 samples or all of them are equal.
    pub fn skewness(&mut self) -> Option<f64> {
        if self.properties.skewness.is_some() {
            return self.properties.skewness;
        }

        let n: usize = self.data.len();
        if n < 3 {
            return None;
        }
        let n: f64 = n as f64;

        let mean: f64 = self.mean();
        let std_dev: f64 = self.variance()?.sqrt();
        if std_dev == 0.0 {
            return None;
        }

        let sum_cubes: f64 = self
            .data
            .iter()
            .map(|&s| {
                let centered: f64 = s - mean;
                centered * centered * centered
            })
            .sum::<f64>();

        let std_dev_cubed: f64 = std_dev * std_dev * std_dev;
        let skewness: f64 = sum_cubes * (n / ((n - 1.0) * (n - 2.0) * std_dev_cubed));

        self.properties.skewness = Some(skewness);
        return Some(skewness);
    }

    /// Computes the sample [excess kurtosis](https://en.wikipedia.org/wiki/Kurtosis#Sample_kurtosis)
    /// and returns it.
    ///
    /// `g_2 = m_4 / m_2^2 - 3` where `m_k` is the `k`-th central moment of the sample.
    ///
    /// Returns [None] if there are less than 2 samples or all of them are equal.
    pub fn excess_kurtosis(&mut self) -> Option<f64> {
        if self.properties.excess_kurtosis.is_some() {
            return self.properties.excess_kurtosis;
        }

        if self.data.len() < 2 {
            return None;
        }

        let n: f64 = self.data.len() as f64;
        let mean: f64 = self.mean();

        let (m2, m4): (f64, f64) = self.data.iter().fold((0.0, 0.0), |(m2, m4), &s| {
            let centered_sq: f64 = (s - mean) * (s - mean);
            (m2 + centered_sq, m4 + centered_sq * centered_sq)
        });
        let (m2, m4): (f64, f64) = (m2 / n, m4 / n);

        if m2 == 0.0 {
            return None;
        }

        let excess_kurtosis: f64 = m4 / (m2 * m2) - 3.0;
        self.properties.excess_kurtosis = Some(excess_kurtosis);
        return Some(excess_kurtosis);
    }

    /// Returns the maximum value of the sample.
    pub fn maximum(&mut self) -> f64 {
        if let Some(maximum) = self.properties.maximum {
            return maximum;
        }

        let maximum: f64 = self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.properties.maximum = Some(maximum);
        return maximum;
    }

    /// Returns the minimum value of the sample.
    pub fn minimum(&mut self) -> f64 {
        if let Some(minimum) = self.properties.minimum {
            return minimum;
        }

        let minimum: f64 = self.data.iter().copied().fold(f64::INFINITY, f64::min);
        self.properties.minimum = Some(minimum);
        return minimum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_data() {
        assert_eq!(Samples::new(&[]), Err(SkewStudentError::InvalidSamples));
        assert_eq!(Samples::new(&[1.0, f64::NAN]), Err(SkewStudentError::InvalidSamples));
        assert_eq!(Samples::new(&[f64::INFINITY]), Err(SkewStudentError::InvalidSamples));
    }

    #[test]
    fn basic_statistics() {
        let mut samples: Samples = Samples::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(samples.mean(), 5.0);
        assert!((samples.variance().unwrap() - 32.0 / 7.0).abs() < 1e-12);
        assert_eq!(samples.maximum(), 9.0);
        assert_eq!(samples.minimum(), 2.0);
        assert_eq!(samples.peek_properties().mean, Some(5.0));
    }

    #[test]
    fn symmetric_data_has_no_skewness() {
        let mut samples: Samples = Samples::new(&[-3.0, -1.0, 0.0, 1.0, 3.0]).unwrap();
        assert!(samples.skewness().unwrap().abs() < 1e-12);
    }

    #[test]
    fn kurtosis_of_two_points() {
        // two equally likely points: m4 / m2^2 = 1
        let mut samples: Samples = Samples::new(&[-1.0, 1.0, -1.0, 1.0]).unwrap();
        assert!((samples.excess_kurtosis().unwrap() + 2.0).abs() < 1e-12);
    }

    #[test]
    fn constant_data() {
        let mut samples: Samples = Samples::new(&[3.0, 3.0, 3.0]).unwrap();
        assert_eq!(samples.variance(), Some(0.0));
        assert_eq!(samples.skewness(), None);
        assert_eq!(samples.excess_kurtosis(), None);
    }
}
