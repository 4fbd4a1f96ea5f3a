// The parameters of a skewed Student T are estimated (outside of this library) by
// maximizing the log-likelihood. Here we check the pieces that an optimizer needs.

use SkewedStudent::{
    distribution_trait::{Distribution, Parametric},
    distributions::SkewStudent::SkewStudent,
    errors::SkewStudentError,
};
use assert_approx_eq::assert_approx_eq;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn log_likelihood() {
    let distribution: SkewStudent = SkewStudent::new(5.0, 0.2).unwrap();
    let data: [f64; 5] = [-1.3, -0.2, 0.0, 0.7, 2.5];

    let expected: f64 = data.iter().map(|x| distribution.pdf(*x).ln()).sum::<f64>();
    assert_approx_eq!(distribution.log_likelihood(&data), expected, 1.0e-12);
    assert_eq!(distribution.log_likelihood(&[]), 0.0);

    let general: f64 = distribution.general_log_likelihood(&[5.0, 0.2], &data).unwrap();
    assert_approx_eq!(general, expected, 1.0e-12);

    // other parameters
    let other: SkewStudent = SkewStudent::new(8.0, -0.4).unwrap();
    let general: f64 = distribution.general_log_likelihood(&[8.0, -0.4], &data).unwrap();
    assert_approx_eq!(general, other.log_likelihood(&data), 1.0e-12);
}

#[test]
fn log_likelihood_invalid_parameters() {
    let distribution: SkewStudent = SkewStudent::new(5.0, 0.2).unwrap();
    let data: [f64; 3] = [0.1, 0.2, 0.3];

    assert!(matches!(
        distribution.general_log_likelihood(&[2.0, 0.0], &data),
        Err(SkewStudentError::InvalidParameter { name: "eta", .. })
    ));
    assert!(matches!(
        distribution.general_log_likelihood(&[5.0, 1.5], &data),
        Err(SkewStudentError::InvalidParameter { name: "lambda", .. })
    ));

    // an optimizer with the wrong dimension
    assert_eq!(
        distribution.general_log_likelihood(&[5.0], &data),
        Err(SkewStudentError::WrongNumberOfParameters { expected: 2, found: 1 })
    );
    assert_eq!(
        distribution.general_log_likelihood(&[], &data),
        Err(SkewStudentError::WrongNumberOfParameters { expected: 2, found: 0 })
    );
}

#[test]
fn log_likelihood_prefers_true_parameters() {
    let distribution: SkewStudent = SkewStudent::new(6.0, -0.4).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(2024);
    let data: Vec<f64> = distribution.sample_multiple_with(20_000, &mut rng);

    let mut parameters: [f64; 2] = [0.0; 2];
    distribution.get_parameters(&mut parameters);
    let best: f64 = distribution.general_log_likelihood(&parameters, &data).unwrap();

    for (eta, lambda) in [(6.0, 0.4), (6.0, 0.0), (30.0, -0.4), (3.0, -0.4)] {
        let other: f64 = distribution.general_log_likelihood(&[eta, lambda], &data).unwrap();
        assert!(other < best, "eta: {eta}, lambda: {lambda}");
    }
}
