//! Element types for benchmark buffers
//!
//! Kernels work with three element kinds: signed integers, reals and complex
//! pairs of reals. `DType` names them at runtime; the `Element` trait connects
//! the Rust types to their tag and to the scalar collapse used by checksums.

pub mod complex;
mod element;

pub use complex::Complex128;
pub use element::Element;

use std::fmt;

/// Integer element type used by kernels
pub type Int = i32;

/// Real element type used by kernels
pub type Real = f64;

/// Complex element type used by kernels
pub type Complex = Complex128;

/// Element types a benchmark buffer can hold
///
/// The discriminant values are stable and follow the numbering ranges used
/// for integer (10-19), float (0-9) and complex (40-49) types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit signed integer
    I32 = 11,
    /// 128-bit complex (two f64: re, im)
    Complex128 = 41,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Complex128 => 16,
            Self::F64 => 8,
            Self::I32 => 4,
        }
    }

    /// Short name for display (e.g., "f64", "i32")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::I32 => "i32",
            Self::Complex128 => "c128",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_rust_types() {
        assert_eq!(DType::F64.size_in_bytes(), std::mem::size_of::<Real>());
        assert_eq!(DType::I32.size_in_bytes(), std::mem::size_of::<Int>());
        assert_eq!(
            DType::Complex128.size_in_bytes(),
            std::mem::size_of::<Complex>()
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DType::F64.to_string(), "f64");
        assert_eq!(DType::Complex128.to_string(), "c128");
    }
}
