//! The distributions implemented in this library.
//!
//! The [StudentT] is the building block of the [SkewStudent].

pub mod SkewStudent;
pub mod StudentT;
