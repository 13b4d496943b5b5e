//! # kernperf
//!
//! **Deterministic inputs and stable checksums for cross-backend kernel benchmarking.**
//!
//! kernperf is the core of a performance harness that runs numerical kernels
//! under several execution back-ends and compares both their timings and
//! their results. Comparisons are only meaningful when every back-end sees
//! bit-identical inputs and the verification reduction is insensitive to
//! rounding drift; this crate provides both.
//!
//! ## Features
//!
//! - **Data initialization**: integer, real, complex and scalar fill policies
//!   driven by an alternating factor and fixed-seed random draws
//! - **Checksums**: weighted, Kahan-compensated, strictly ordered reductions
//! - **Aligned buffers**: zero-filled, alignment-requested host allocations
//! - **Variants**: sequential, lane-chunked and rayon schedulers behind one trait
//! - **Harness**: kernel lifecycle, timing, and a suite executor that reports
//!   unavailable or unknown variants instead of failing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kernperf::prelude::*;
//!
//! let mut suite = Suite::new(RunParams::default().with_size(500).with_reps(5));
//! suite.add_kernel(PolybenchAtax::new());
//! let report = suite.run();
//! assert!(report.checksum_mismatches(0.0).is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): threaded back-end and first-touch placement pass

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod data;
pub mod dtype;
pub mod error;
pub mod kernel;
pub mod runtime;
pub mod suite;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::data::{DataInit, checksum};
    pub use crate::dtype::{Complex, DType, Element, Int, Real};
    pub use crate::error::{Error, Result};
    pub use crate::kernel::polybench::PolybenchAtax;
    pub use crate::kernel::{Kernel, KernelResult, RunParams, RunTimer};
    pub use crate::runtime::{
        AlignedBuffer, DEFAULT_ALIGN, ParallelismConfig, Scheduler, Variant, allocate, deallocate,
    };
    pub use crate::suite::{Suite, SuiteReport};
}
