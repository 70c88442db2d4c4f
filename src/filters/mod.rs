//! Recursive filtering primitives.
//!
//! One engine, [`Biquad`], is shared by the gravity decomposition and the
//! final smoothing stage; the two differ only in their [`CoefficientSet`].
mod biquad;
mod coefficients;

pub use biquad::Biquad;
pub use coefficients::{CoefficientError, CoefficientSet, GRAVITY, SMOOTHING};
