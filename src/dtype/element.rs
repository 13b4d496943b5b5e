//! Element trait for mapping Rust types to DType

use super::{Complex128, DType};
use bytemuck::{Pod, Zeroable};

/// Trait for types that can be elements of a benchmark buffer
///
/// # Bounds
/// - `Pod + Zeroable` - zero-filled allocations are valid values (bytemuck)
/// - `Send + Sync` - buffers may be touched from a parallel region
pub trait Element: Copy + Send + Sync + Pod + Zeroable + PartialEq + std::fmt::Debug + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Scalar value fed into checksum accumulation
    ///
    /// For complex types this is `re + im`, not the magnitude.
    fn checksum_value(self) -> f64;
}

impl Element for i32 {
    const DTYPE: DType = DType::I32;

    #[inline]
    fn checksum_value(self) -> f64 {
        self as f64
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn checksum_value(self) -> f64 {
        self
    }
}

impl Element for Complex128 {
    const DTYPE: DType = DType::Complex128;

    #[inline]
    fn checksum_value(self) -> f64 {
        self.re + self.im
    }
}
