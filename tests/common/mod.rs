//! Common test utilities
#![allow(dead_code)]

use kernperf::data::DataInit;
use kernperf::dtype::Element;
use kernperf::runtime::{AlignedBuffer, DEFAULT_ALIGN, Variant};

/// Fresh initializer with a zero counter
pub fn fresh_init() -> DataInit {
    DataInit::new()
}

/// Allocate `len` zeroed elements at the default alignment for `Base_Seq`
pub fn zeroed<T: Element>(len: usize) -> AlignedBuffer<T> {
    kernperf::runtime::allocate::<T>(len, DEFAULT_ALIGN, Variant::BaseSeq).unwrap()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f64 slices are bitwise identical
pub fn assert_bitwise_eq(a: &[f64], b: &[f64], msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert_eq!(
            x.to_bits(),
            y.to_bits(),
            "{}: element {} differs: {} vs {}",
            msg,
            i,
            x,
            y
        );
    }
}
