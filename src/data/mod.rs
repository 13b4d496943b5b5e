//! Benchmark data: initialization and verification checksums
//!
//! Kernels allocate and fill their inputs through [`DataInit`] before timing,
//! then reduce their outputs with [`checksum`] afterwards. Given the same
//! sequence of calls from a reset counter, both sides are bit-reproducible
//! across runs and across execution back-ends.
//!
//! ```ignore
//! use kernperf::data::{DataInit, checksum};
//! use kernperf::runtime::{DEFAULT_ALIGN, Variant};
//!
//! let mut init = DataInit::new();
//! let x = init.alloc_and_init::<f64>(1000, DEFAULT_ALIGN, Variant::BaseSeq)?;
//! let sum = checksum(&x, 1.0);
//! ```

mod checksum;
mod counter;
mod init;
mod random;

pub use checksum::{ExtendedSum, checksum, checksum_len, checksum_weight, weighted_sum};
pub use counter::{
    EVEN_COMPLEX_FACTOR, EVEN_FACTOR, InitCounter, ODD_COMPLEX_FACTOR, ODD_FACTOR,
};
pub use init::{
    DataInit, INT_HIGH_SENTINEL, INT_LOW_SENTINEL, InitElement, SharedDataInit, positional_value,
};
pub use random::{FILL_SEED, SeededDraws};

pub use crate::runtime::{allocate, deallocate};
