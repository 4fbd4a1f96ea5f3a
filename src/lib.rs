#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
// ^Disable warning "crate `SkewedStudent` should have a snake case name convert the identifier to snake case: `skewed_student`"
// The rest of the names will follow the snake_case convention.

//! # Skewed Student
//!
//!
//! This library implements the skewed Student's T distribution of
//! [Hansen (1994)](https://doi.org/10.2307/2527081), a distribution with zero mean,
//! unit variance, heavy tails and a skewness parameter. It provides:
//!
//! - [x] Evaluation of the pdf, cdf and quantile function (ppf)
//! - [x] Evaluation over slices and over [ndarray] arrays of any shape
//! - [x] Random sampling (thread-local or user provided generator)
//! - [x] Closed-form moments (skewness, kurtosis), mode, median and entropy
//! - [x] Log-likelihood (for an external fitting procedure)
//! - [x] Sample statistics ([Samples](Samples::Samples))
//! - [ ] Parameter estimation
//! - [x] Updated to rust 2024 version
//!
//! ## Distributions
//!
//! We have defined the trait [Distribution] that defines a basic interface to work
//! with distributions. The requiered methods are the pdf, the cdf, the quantile
//! function and the moments. After this, a wide array of funcions are avaliable
//! (check [distribution_trait::Distribution] for more details).
//!
//!  - [x] [Skewed Student's T distribution](crate::distributions::SkewStudent)
//!  - [x] [Student's T distribution](crate::distributions::StudentT) ([Wiki](https://en.wikipedia.org/wiki/Student%27s_t-distribution))
//!
//! ```
//! use SkewedStudent::{Distribution, SkewStudent};
//!
//! let distribution: SkewStudent = SkewStudent::new(3.0, -0.5).unwrap();
//! let p: f64 = distribution.cdf(0.5);
//! let x: f64 = distribution.quantile(p).unwrap();
//! assert!((x - 0.5).abs() < 1e-9);
//! ```
//!
//! ## Logging
//!
//! The library emits [tracing] events (at `debug` and `trace` level) but it never
//! installs a subscriber. That is a choice of the final application.
//!
//! ***
//!

pub mod Samples;
pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;

pub use distribution_trait::{Distribution, Parametric};
pub use distributions::SkewStudent::{SkewStudent, SkewStudentParams};
pub use distributions::StudentT::StudentT;
pub use errors::SkewStudentError;
