use SkewedStudent::{
    Distribution, SkewStudent, SkewStudentError, SkewStudentParams, Samples::Samples,
};
use ndarray::{Array1, Array2};
use rand::{SeedableRng, rngs::StdRng};

fn print_paired_vectors(input: &[f64], output: &[f64]) {
    assert!(input.len() == output.len());

    for (i, (a, b)) in input.iter().zip(output.iter()).enumerate() {
        println!("{i}\t{:.3}: \t{:.8}", a, b);
    }
    println!();
}

fn main() -> Result<(), SkewStudentError> {
    // Set RUST_LOG=debug to see the events of the library
    tracing_subscriber::fmt::init();

    println!(
        "*****************************************************************\n\
    This script shows how to use the skewed Student T distribution. \
    It has zero mean and unit variance, and 2 parameters: the degrees of \
    freedom (eta) and the skewness (lambda). \n"
    );

    let distribution: SkewStudent = SkewStudent::new(3.0, -0.5)?;
    println!(
        "eta: {} \t lambda: {} \t (a, b, c): ({:.6}, {:.6}, {:.6}) \n",
        distribution.get_eta(),
        distribution.get_lambda(),
        distribution.get_a(),
        distribution.get_b(),
        distribution.get_c()
    );

    let points: Array1<f64> = Array1::linspace(-3.0, 3.0, 13);
    println!("pdf: ");
    print_paired_vectors(points.as_slice().unwrap_or(&[]), distribution.pdf_array(&points).as_slice().unwrap_or(&[]));
    println!("cdf: ");
    print_paired_vectors(points.as_slice().unwrap_or(&[]), distribution.cdf_array(&points).as_slice().unwrap_or(&[]));

    let probabilities: [f64; 5] = [0.01, 0.1, 0.5, 0.9, 0.99];
    println!("quantile: ");
    print_paired_vectors(&probabilities, &distribution.quantile_multiple(&probabilities)?);

    match distribution.quantile(1.5) {
        Ok(_) => println!("This should not happen"),
        Err(error) => println!("Expected error: {error} \n"),
    }

    // A less extreme distribution, created with the builder
    let params: SkewStudentParams = SkewStudentParams::builder().eta(8.0).lambda(-0.3).build();
    let distribution: SkewStudent = SkewStudent::from_params(params)?;

    println!("Moments of eta = 8, lambda = -0.3: ");
    println!("\tExpected value: {:?}", distribution.expected_value());
    println!("\tVariance: {:?}", distribution.variance());
    println!("\tSkewness: {:?}", distribution.skewness());
    println!("\tExcess kurtosis: {:?}", distribution.excess_kurtosis());
    println!("\tMode: {:.6}", distribution.mode());
    println!("\tMedian: {:.6}", distribution.median());
    println!("\tEntropy: {:.6} \n", distribution.entropy());

    let mut rng: StdRng = StdRng::seed_from_u64(42);
    let draws: Array2<f64> = distribution.sample_array_with((4, 3), &mut rng);
    println!("Random samples with shape {:?}: \n{:.4} \n", draws.shape(), draws);

    let data: Vec<f64> = distribution.sample_multiple_with(50_000, &mut rng);
    println!(
        "Log-likelihood of {} samples: {:.3}",
        data.len(),
        distribution.log_likelihood(&data)
    );

    let mut samples: Samples = Samples::new_move(data)?;
    println!("\tSample mean: {:.4}", samples.mean());
    println!("\tSample variance: {:.4}", samples.variance().unwrap_or(f64::NAN));
    println!("\tSample skewness: {:.4}", samples.skewness().unwrap_or(f64::NAN));
    println!("\tSample excess kurtosis: {:.4}", samples.excess_kurtosis().unwrap_or(f64::NAN));
    println!("\tRange: [{:.3}, {:.3}]", samples.minimum(), samples.maximum());

    return Ok(());
}
