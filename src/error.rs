//! Error types for kernperf

use thiserror::Error;

/// Result type alias using kernperf's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or running kernels
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer could not be obtained at the requested size/alignment
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Variant name not recognized
    #[error("Unknown variant '{name}'")]
    UnknownVariant {
        /// The name that failed to parse
        name: String,
    },

    /// Kernel has no implementation for the requested variant
    #[error("Kernel '{kernel}' does not implement variant {variant}")]
    UnsupportedVariant {
        /// Kernel name
        kernel: &'static str,
        /// Variant name
        variant: &'static str,
    },

    /// Variant is known but its back-end is not available in this build
    #[error("Variant {variant} unavailable: {reason}")]
    VariantUnavailable {
        /// Variant name
        variant: &'static str,
        /// Why the back-end cannot run
        reason: String,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create an unknown variant error
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::UnknownVariant { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::OutOfMemory { size: 64 };
        assert_eq!(err.to_string(), "Out of memory: failed to allocate 64 bytes");

        let err = Error::invalid_argument("align", "must be a power of two");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'align': must be a power of two"
        );

        let err = Error::unknown_variant("Base_Fortran");
        assert_eq!(err.to_string(), "Unknown variant 'Base_Fortran'");
    }
}
