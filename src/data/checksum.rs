//! Verification checksums
//!
//! A checksum weights element `j` by `|sin(j+1)| + 0.5` and sums the weighted
//! values left to right. The weights never repeat, so a permuted or partially
//! wrong result is very unlikely to collide with the reference.
//!
//! The sum is carried as a double-double (`hi + lo`, about 106 significand
//! bits) so reference and variant checksums can be compared well below the
//! precision of a single `f64`. Each term is folded in with an error-free
//! TwoSum; the result is rounded to `f64` once, after scaling.

use crate::dtype::Element;
use crate::error::{Error, Result};

/// Double-double running sum
///
/// Invariant: `hi == hi + lo` in `f64` arithmetic, i.e. `lo` is below half an
/// ulp of `hi`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ExtendedSum {
    hi: f64,
    lo: f64,
}

impl ExtendedSum {
    /// Empty sum
    pub const fn new() -> Self {
        Self { hi: 0.0, lo: 0.0 }
    }

    /// Add one term
    #[inline]
    pub fn add(&mut self, x: f64) {
        let s = self.hi + x;
        let bp = s - self.hi;
        let err = (self.hi - (s - bp)) + (x - bp);
        self.renormalize(s, self.lo + err);
    }

    /// Multiply by a real, keeping the low part
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        let p = self.hi * factor;
        let e = self.hi.mul_add(factor, -p);
        let mut out = Self::new();
        out.renormalize(p, e + self.lo * factor);
        out
    }

    #[inline]
    fn renormalize(&mut self, hi: f64, lo: f64) {
        let s = hi + lo;
        self.lo = lo - (s - hi);
        self.hi = s;
    }

    /// High and low parts; their exact sum is the running total
    #[inline]
    pub fn parts(&self) -> (f64, f64) {
        (self.hi, self.lo)
    }

    /// Running total rounded to `f64`
    #[inline]
    pub fn value(&self) -> f64 {
        self.hi + self.lo
    }
}

/// Weight applied to element `j`
#[inline]
pub fn checksum_weight(j: usize) -> f64 {
    (j as f64 + 1.0).sin().abs() + 0.5
}

/// Unscaled weighted sum of `data` at double-double precision
pub fn weighted_sum<T: Element>(data: &[T]) -> ExtendedSum {
    let mut acc = ExtendedSum::new();
    for (j, &v) in data.iter().enumerate() {
        acc.add(checksum_weight(j) * v.checksum_value());
    }
    acc
}

/// Checksum of every element of `data`, multiplied by `scale_factor`
pub fn checksum<T: Element>(data: &[T], scale_factor: f64) -> f64 {
    let value = weighted_sum(data).scaled(scale_factor).value();
    tracing::debug!(dtype = %T::DTYPE, len = data.len(), value, "checksum_computed");
    value
}

/// Checksum of the first `len` elements of `data`
pub fn checksum_len<T: Element>(data: &[T], len: usize, scale_factor: f64) -> Result<f64> {
    if len > data.len() {
        return Err(Error::invalid_argument(
            "len",
            format!("{len} exceeds buffer length {}", data.len()),
        ));
    }
    Ok(checksum(&data[..len], scale_factor))
}
