//! Suite executor
//!
//! Runs every registered kernel under every requested variant. The
//! initialization counter is reset before each (kernel, variant) pair so all
//! variants of a kernel start from identical inputs and their checksums can be
//! compared directly. The initializer's first-touch pass is pointed at the
//! run's thread-pool settings so pages land on the kernel's own workers.
//! Variants that cannot run are reported, never fatal.

use crate::data::DataInit;
use crate::error::{Error, Result};
use crate::kernel::{Kernel, KernelResult, RunParams, RunTimer};
use crate::runtime::Variant;
use std::time::Duration;

/// A (kernel, variant) pair that produced no result
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedRun {
    /// Kernel name
    pub kernel: &'static str,
    /// Variant as requested
    pub variant: String,
    /// Why it did not run
    pub reason: Error,
}

/// Checksum disagreement between a variant and the kernel's reference variant
#[derive(Clone, Debug, PartialEq)]
pub struct ChecksumMismatch {
    /// Kernel name
    pub kernel: &'static str,
    /// First variant that ran for the kernel
    pub reference: Variant,
    /// Variant whose checksum differs
    pub variant: Variant,
    /// `variant` checksum minus `reference` checksum
    pub diff: f64,
}

/// Results of a suite run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuiteReport {
    /// One entry per completed (kernel, variant) pair, in run order
    pub results: Vec<KernelResult>,
    /// Pairs that were requested but not run
    pub skipped: Vec<SkippedRun>,
}

impl SuiteReport {
    /// Result for a kernel under a variant
    pub fn result(&self, kernel: &str, variant: Variant) -> Option<&KernelResult> {
        self.results
            .iter()
            .find(|r| r.kernel == kernel && r.variant == variant)
    }

    /// Checksums differing from the kernel's first result by more than `tolerance`
    pub fn checksum_mismatches(&self, tolerance: f64) -> Vec<ChecksumMismatch> {
        let mut mismatches = Vec::new();
        let mut reference: Option<&KernelResult> = None;
        for r in &self.results {
            let base = match reference {
                Some(base) if base.kernel == r.kernel => base,
                _ => {
                    reference = Some(r);
                    continue;
                }
            };
            let diff = r.checksum - base.checksum;
            if diff.abs() > tolerance {
                mismatches.push(ChecksumMismatch {
                    kernel: r.kernel,
                    reference: base.variant,
                    variant: r.variant,
                    diff,
                });
            }
        }
        mismatches
    }
}

/// Runs kernels across variants
pub struct Suite {
    params: RunParams,
    kernels: Vec<Box<dyn Kernel>>,
    init: DataInit,
}

impl Suite {
    /// Empty suite with the given parameters
    pub fn new(params: RunParams) -> Self {
        Self {
            params,
            kernels: Vec::new(),
            init: DataInit::new(),
        }
    }

    /// Use a specific initializer (e.g. with first-touch disabled)
    pub fn with_data_init(mut self, init: DataInit) -> Self {
        self.init = init;
        self
    }

    /// Register a kernel
    pub fn add_kernel(&mut self, kernel: impl Kernel + 'static) -> &mut Self {
        self.kernels.push(Box::new(kernel));
        self
    }

    /// Run parameters
    pub fn params(&self) -> &RunParams {
        &self.params
    }

    /// Run every kernel under every requested variant
    pub fn run(&mut self) -> SuiteReport {
        let mut report = SuiteReport::default();
        let params = &self.params;

        for kernel in self.kernels.iter_mut() {
            let name = kernel.name();

            for unknown in &params.unknown_variants {
                let reason = Error::unknown_variant(unknown.as_str());
                tracing::warn!(kernel = name, variant = %unknown, %reason, "variant_skipped");
                report.skipped.push(SkippedRun {
                    kernel: name,
                    variant: unknown.clone(),
                    reason,
                });
            }

            for &variant in &params.variants {
                match run_one(&mut self.init, params, kernel.as_mut(), variant) {
                    Ok(result) => {
                        tracing::info!(
                            kernel = name,
                            variant = %variant,
                            reps = result.reps,
                            elapsed_us = result.elapsed.as_micros() as u64,
                            checksum = result.checksum,
                            "kernel_completed"
                        );
                        report.results.push(result);
                    }
                    Err(reason) => {
                        tracing::warn!(
                            kernel = name,
                            variant = %variant,
                            %reason,
                            "variant_skipped"
                        );
                        report.skipped.push(SkippedRun {
                            kernel: name,
                            variant: variant.name().to_string(),
                            reason,
                        });
                    }
                }
            }
        }

        report
    }
}

fn run_one(
    init: &mut DataInit,
    params: &RunParams,
    kernel: &mut dyn Kernel,
    variant: Variant,
) -> Result<KernelResult> {
    variant.ensure_available()?;
    if !kernel.supports(variant) {
        return Err(Error::UnsupportedVariant {
            kernel: kernel.name(),
            variant: variant.name(),
        });
    }

    init.reset();
    init.set_parallelism(params.parallelism);
    let outcome = execute(init, params, kernel, variant);
    kernel.tear_down(variant);
    let (elapsed, checksum) = outcome?;

    Ok(KernelResult {
        kernel: kernel.name(),
        variant,
        reps: params.reps,
        elapsed,
        checksum,
    })
}

fn execute(
    init: &mut DataInit,
    params: &RunParams,
    kernel: &mut dyn Kernel,
    variant: Variant,
) -> Result<(Duration, f64)> {
    kernel.set_up(init, params, variant)?;
    let mut timer = RunTimer::new();
    kernel.run_variant(variant, params, &mut timer)?;
    Ok((timer.elapsed(), kernel.checksum()))
}
