//! The process-global arithmetic mode (spec.md Invariant 6) as a trait
//! bound rather than a runtime tag — `f64` for the real build, `Complex<f64>`
//! for the complex one. Mirrors `ndarray::LinalgScalar`'s own real/complex
//! duality, which the contraction kernel already depends on.

use ndarray::LinalgScalar;
use num_complex::Complex64;
use num_traits::Zero;

pub trait Scalar:
    LinalgScalar + Zero + Copy + Send + Sync + std::fmt::Debug + PartialEq + 'static
{
    fn conj(self) -> Self;
    fn modulus(self) -> f64;
    fn from_f64(x: f64) -> Self;
}

impl Scalar for f64 {
    fn conj(self) -> Self {
        self
    }
    fn modulus(self) -> f64 {
        self.abs()
    }
    fn from_f64(x: f64) -> Self {
        x
    }
}

impl Scalar for Complex64 {
    fn conj(self) -> Self {
        Complex64::conj(&self)
    }
    fn modulus(self) -> f64 {
        Complex64::norm(self)
    }
    fn from_f64(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }
}
