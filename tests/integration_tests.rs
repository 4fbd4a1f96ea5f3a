use SkewedStudent::{distribution_trait::*, distributions::SkewStudent::SkewStudent, euclid, StudentT};

#[test]
fn integration_pdf_is_normalized() {
    for (eta, lambda) in [(3.0, -0.5), (4.0, 0.6), (10.0, -0.3), (30.0, 0.1)] {
        let d: SkewStudent = SkewStudent::new(eta, lambda).unwrap();

        let area: f64 = euclid::integrate_reals(|x: f64| d.pdf(x));
        println!("eta: {eta}, lambda: {lambda}, area: {area}");
        assert!((area - 1.0).abs() < 1.0e-6);
    }
}

#[test]
fn integration_moments() {
    // the mean is 0 and the variance is 1 for any valid parameters
    let d: SkewStudent = SkewStudent::new(10.0, -0.3).unwrap();

    let mean: f64 = euclid::integrate_reals(|x: f64| x * d.pdf(x));
    let second_moment: f64 = euclid::integrate_reals(|x: f64| x * x * d.pdf(x));
    let third_moment: f64 = euclid::integrate_reals(|x: f64| x * x * x * d.pdf(x));

    assert!(mean.abs() < 1.0e-6);
    assert!((second_moment - 1.0).abs() < 1.0e-6);
    assert!((third_moment - d.skewness().unwrap()).abs() < 1.0e-5);
}

#[test]
fn integration_entropy() {
    // numerical entropy (deafult method) against the closed form of the Student T
    for (eta, expected) in [(5.0, 1.37208986053140063), (7.0, 1.39814214340699864)] {
        let symmetric: SkewStudent = SkewStudent::new(eta, 0.0).unwrap();
        let t: StudentT = StudentT::new_standardized(eta).unwrap();

        assert!((t.entropy() - expected).abs() < 1.0e-10);
        assert!((symmetric.entropy() - expected).abs() < 1.0e-6);
    }

    let d: SkewStudent = SkewStudent::new(10.0, -0.3).unwrap();
    assert!((d.entropy() - 1.38307771940416401).abs() < 1.0e-6);
}

#[test]
fn integration_convergence() {
    // with few steps the result is worse, but still reasonable
    let d: SkewStudent = SkewStudent::new(6.0, 0.4).unwrap();
    let coarse: f64 = euclid::numerical_integration_reals(|x: f64| d.pdf(x), 1025);
    let fine: f64 = euclid::numerical_integration_reals(|x: f64| d.pdf(x), 65537);

    assert!((fine - 1.0).abs() <= (coarse - 1.0).abs() + 1.0e-12);
    assert!((coarse - 1.0).abs() < 1.0e-3);
}
