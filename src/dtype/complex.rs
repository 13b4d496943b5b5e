//! Complex element type
//!
//! Complex numbers are stored in interleaved format (re, im), so a buffer of
//! `Complex128` has the same layout as twice as many `f64` values.
//!
//! Only scaling and division by a real are provided. Both act on each
//! component independently, so `factor * x / y` equals the componentwise
//! result bit for bit.

use bytemuck::{Pod, Zeroable};
use std::ops::{Div, Mul};

/// 128-bit complex number with f64 real and imaginary parts
///
/// Memory layout: f64 × 2, interleaved.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Complex128 {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex128 {
    /// Zero complex number
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Create a new complex number
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl Mul<f64> for Complex128 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

impl Div<f64> for Complex128 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self {
            re: self.re / rhs,
            im: self.im / rhs,
        }
    }
}
