use SkewedStudent::{distribution_trait::Distribution, distributions::SkewStudent::*, Samples::*};
use assert_approx_eq::assert_approx_eq;
use ndarray::{Array0, Array1, Array2, Ix0};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn sample_moments() {
    let distribution: SkewStudent = SkewStudent::new(5.0, -0.3).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(42);

    let data: Vec<f64> = distribution.sample_multiple_with(100_000, &mut rng);
    let mut samples: Samples = Samples::new_move(data).unwrap();

    let mean: f64 = samples.mean();
    let variance: f64 = samples.variance().unwrap();
    println!("mean: {mean}, variance: {variance}");

    assert_approx_eq!(mean, 0.0, 0.05);
    assert_approx_eq!(variance, 1.0, 0.05);
}

#[test]
fn sample_skewness() {
    let distribution: SkewStudent = SkewStudent::new(10.0, -0.3).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(7);

    let mut samples: Samples = Samples::new_move(distribution.sample_multiple_with(100_000, &mut rng)).unwrap();

    let skewness: f64 = samples.skewness().unwrap();
    println!("skewness: {skewness}");
    assert_approx_eq!(skewness, distribution.skewness().unwrap(), 0.1);

    // the median of the sample is close to the median of the distribution
    let mut sorted: Vec<f64> = samples.peek_data().to_vec();
    sorted.sort_by(f64::total_cmp);
    assert_approx_eq!(sorted[sorted.len() / 2], distribution.median(), 0.02);
}

#[test]
fn sample_reproducible() {
    let distribution: SkewStudent = SkewStudent::new(4.0, 0.5).unwrap();

    let mut rng_a: StdRng = StdRng::seed_from_u64(1234);
    let mut rng_b: StdRng = StdRng::seed_from_u64(1234);
    let a: Vec<f64> = distribution.sample_multiple_with(100, &mut rng_a);
    let b: Vec<f64> = distribution.sample_multiple_with(100, &mut rng_b);
    assert_eq!(a, b);

    let single_a: f64 = distribution.sample_with(&mut rng_a);
    let single_b: f64 = distribution.sample_with(&mut rng_b);
    assert_eq!(single_a, single_b);

    let mut rng_c: StdRng = StdRng::seed_from_u64(4321);
    let c: Vec<f64> = distribution.sample_multiple_with(100, &mut rng_c);
    assert_ne!(a, c);

    assert!(a.iter().all(|x| x.is_finite()));
}

#[test]
fn sample_shapes() {
    let distribution: SkewStudent = SkewStudent::new(6.0, 0.2).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(3);

    let scalar: Array0<f64> = distribution.sample_array_with(Ix0(), &mut rng);
    assert_eq!(scalar.ndim(), 0);
    assert!(scalar.into_scalar().is_finite());

    let vector: Array1<f64> = distribution.sample_array_with(5, &mut rng);
    assert_eq!(vector.shape(), &[5]);

    let matrix: Array2<f64> = distribution.sample_array_with((2, 3), &mut rng);
    assert_eq!(matrix.shape(), &[2, 3]);

    // the array is filled in the same order as the multiple variant
    let mut rng_a: StdRng = StdRng::seed_from_u64(99);
    let mut rng_b: StdRng = StdRng::seed_from_u64(99);
    let matrix: Array2<f64> = distribution.sample_array_with((2, 3), &mut rng_a);
    let flat: Vec<f64> = distribution.sample_multiple_with(6, &mut rng_b);
    assert_eq!(matrix.iter().copied().collect::<Vec<f64>>(), flat);

    // thread rng
    assert_eq!(distribution.sample_multiple(10).len(), 10);
    assert_eq!(distribution.sample_array((3, 1)).shape(), &[3, 1]);
    assert!(distribution.sample().is_finite());
}

#[test]
fn samples_statistics() {
    let mut samples: Samples = Samples::new(&[1.0, 2.0, 3.0, 4.0, 10.0]).unwrap();

    assert_approx_eq!(samples.mean(), 4.0);
    assert_approx_eq!(samples.variance().unwrap(), 12.5);
    assert_eq!(samples.minimum(), 1.0);
    assert_eq!(samples.maximum(), 10.0);
    assert!(0.0 < samples.skewness().unwrap());
    assert!(samples.excess_kurtosis().is_some());

    let properties: &SampleProperties = samples.peek_properties();
    assert_eq!(properties.mean, Some(4.0));
    assert_eq!(properties.minimum, Some(1.0));

    let mut single: Samples = Samples::new(&[3.0]).unwrap();
    assert_eq!(single.mean(), 3.0);
    assert_eq!(single.variance(), None);
    assert_eq!(single.skewness(), None);
}
