//! Execution variant identifiers
//!
//! A variant pairs a back-end (where the loop runs) with a style (how the loop
//! body is spelled). Kernels implement some subset of the catalogue; the suite
//! runs each kernel once per requested variant and compares checksums.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Where a kernel's loops execute
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Plain sequential loops on the host
    Seq,
    /// Sequential loops over fixed-width lanes
    Simd,
    /// Host thread pool
    Threads,
    /// Device offload, provided by an external collaborator
    Accel,
}

impl Backend {
    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seq => "Seq",
            Self::Simd => "Simd",
            Self::Threads => "Threads",
            Self::Accel => "Accel",
        }
    }

    /// Whether this build can run loops on the back-end
    pub const fn is_available(self) -> bool {
        match self {
            Self::Seq | Self::Simd => true,
            Self::Threads => cfg!(feature = "rayon"),
            Self::Accel => false,
        }
    }
}

/// How a kernel body is expressed
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Hand-written loops with the body inlined
    Base,
    /// Hand-written loops calling the body as a closure
    Lambda,
    /// Body handed to a scheduler
    Policy,
}

/// Execution variant of a kernel
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Inlined sequential loops
    BaseSeq,
    /// Sequential loops over closures
    LambdaSeq,
    /// Sequential scheduler
    PolicySeq,
    /// Lane-chunked loops
    BaseSimd,
    /// Thread pool, inlined body
    BaseThreads,
    /// Thread pool, closure body
    LambdaThreads,
    /// Thread pool scheduler
    PolicyThreads,
    /// Accelerator, inlined body
    BaseAccel,
    /// Accelerator, closure body
    LambdaAccel,
    /// Accelerator scheduler
    PolicyAccel,
}

impl Variant {
    /// Every variant, in reporting order
    pub const ALL: [Variant; 10] = [
        Self::BaseSeq,
        Self::LambdaSeq,
        Self::PolicySeq,
        Self::BaseSimd,
        Self::BaseThreads,
        Self::LambdaThreads,
        Self::PolicyThreads,
        Self::BaseAccel,
        Self::LambdaAccel,
        Self::PolicyAccel,
    ];

    /// Canonical name, e.g. `Base_Seq`
    pub const fn name(self) -> &'static str {
        match self {
            Self::BaseSeq => "Base_Seq",
            Self::LambdaSeq => "Lambda_Seq",
            Self::PolicySeq => "Policy_Seq",
            Self::BaseSimd => "Base_Simd",
            Self::BaseThreads => "Base_Threads",
            Self::LambdaThreads => "Lambda_Threads",
            Self::PolicyThreads => "Policy_Threads",
            Self::BaseAccel => "Base_Accel",
            Self::LambdaAccel => "Lambda_Accel",
            Self::PolicyAccel => "Policy_Accel",
        }
    }

    /// Back-end the variant runs on
    pub const fn backend(self) -> Backend {
        match self {
            Self::BaseSeq | Self::LambdaSeq | Self::PolicySeq => Backend::Seq,
            Self::BaseSimd => Backend::Simd,
            Self::BaseThreads | Self::LambdaThreads | Self::PolicyThreads => Backend::Threads,
            Self::BaseAccel | Self::LambdaAccel | Self::PolicyAccel => Backend::Accel,
        }
    }

    /// Loop-body style of the variant
    pub const fn style(self) -> Style {
        match self {
            Self::BaseSeq | Self::BaseSimd | Self::BaseThreads | Self::BaseAccel => Style::Base,
            Self::LambdaSeq | Self::LambdaThreads | Self::LambdaAccel => Style::Lambda,
            Self::PolicySeq | Self::PolicyThreads | Self::PolicyAccel => Style::Policy,
        }
    }

    /// Whether this build can run the variant
    pub const fn is_available(self) -> bool {
        self.backend().is_available()
    }

    /// Variants this build can run
    pub fn available() -> impl Iterator<Item = Variant> {
        Self::ALL.into_iter().filter(|v| v.is_available())
    }

    /// Return an error when the variant's back-end is missing from this build
    pub fn ensure_available(self) -> Result<()> {
        if self.is_available() {
            return Ok(());
        }
        let reason = match self.backend() {
            Backend::Threads => "built without the `rayon` feature".to_string(),
            Backend::Accel => "no accelerator back-end is linked".to_string(),
            Backend::Seq | Backend::Simd => unreachable!("host back-ends are always available"),
        };
        Err(Error::VariantUnavailable {
            variant: self.name(),
            reason,
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_variant(s))
    }
}
