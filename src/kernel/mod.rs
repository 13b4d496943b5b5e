//! Kernel harness
//!
//! A kernel is set up (buffers allocated and filled through [`DataInit`]),
//! run for a number of repetitions under one variant while a [`RunTimer`]
//! measures the loop, reduced to a checksum, and torn down. The suite drives
//! this lifecycle once per requested variant.

mod params;
pub mod polybench;
mod timer;

pub use params::RunParams;
pub use timer::RunTimer;

use crate::data::DataInit;
use crate::error::Result;
use crate::runtime::Variant;
use std::time::Duration;

/// A benchmark kernel runnable under several variants
pub trait Kernel: Send {
    /// Kernel name, e.g. `POLYBENCH_ATAX`
    fn name(&self) -> &'static str;

    /// Whether the kernel has an implementation for `variant`
    fn supports(&self, variant: Variant) -> bool;

    /// Allocate and initialize inputs and outputs
    fn set_up(&mut self, init: &mut DataInit, params: &RunParams, variant: Variant)
    -> Result<()>;

    /// Run the timed repetitions
    fn run_variant(&mut self, variant: Variant, params: &RunParams, timer: &mut RunTimer)
    -> Result<()>;

    /// Checksum of the kernel's outputs after `run_variant`
    fn checksum(&self) -> f64;

    /// Release all buffers; must be safe to call after a failed set up
    fn tear_down(&mut self, variant: Variant);
}

/// Timing and checksum of one kernel under one variant
#[derive(Clone, Debug, PartialEq)]
pub struct KernelResult {
    /// Kernel name
    pub kernel: &'static str,
    /// Variant the kernel ran under
    pub variant: Variant,
    /// Repetitions timed
    pub reps: usize,
    /// Wall time of the timed region
    pub elapsed: Duration,
    /// Output checksum
    pub checksum: f64,
}

impl KernelResult {
    /// Average time per repetition
    pub fn time_per_rep(&self) -> Duration {
        if self.reps == 0 {
            return Duration::ZERO;
        }
        let nanos = self.elapsed.as_nanos() / self.reps as u128;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
