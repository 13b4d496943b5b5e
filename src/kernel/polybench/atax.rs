//! POLYBENCH_ATAX: `y = Aᵀ (A x)`
//!
//! ```text
//! for i: tmp[i] = Σ_j A[i][j] · x[j]
//! for j:   y[j] = Σ_i A[i][j] · tmp[i]
//! ```
//!
//! Each output element is one dot product accumulated in index order, so the
//! result is identical whichever scheduler distributes the outer loop.

use crate::data::{DataInit, checksum, deallocate};
use crate::dtype::Real;
use crate::error::{Error, Result};
use crate::kernel::{Kernel, RunParams, RunTimer};
use crate::runtime::{AlignedBuffer, Backend, Scheduler, SchedulerKind, Style, Variant};

const CHECKSUM_SCALE: f64 = 1.0;

#[inline]
fn row_dot(a: &[Real], x: &[Real], n: usize, i: usize) -> Real {
    let mut dot = 0.0;
    for j in 0..n {
        dot += a[j + i * n] * x[j];
    }
    dot
}

#[inline]
fn col_dot(a: &[Real], tmp: &[Real], n: usize, j: usize) -> Real {
    let mut dot = 0.0;
    for i in 0..n {
        dot += a[j + i * n] * tmp[i];
    }
    dot
}

/// Matrix transpose times matrix-vector product
#[derive(Debug, Default)]
pub struct PolybenchAtax {
    n: usize,
    a: Option<AlignedBuffer<Real>>,
    x: Option<AlignedBuffer<Real>>,
    y: Option<AlignedBuffer<Real>>,
    tmp: Option<AlignedBuffer<Real>>,
}

impl PolybenchAtax {
    /// Kernel with no buffers; sized at `set_up`
    pub fn new() -> Self {
        Self::default()
    }

    /// Output vector, if set up
    pub fn y(&self) -> Option<&[Real]> {
        self.y.as_deref()
    }
}

impl Kernel for PolybenchAtax {
    fn name(&self) -> &'static str {
        "POLYBENCH_ATAX"
    }

    fn supports(&self, variant: Variant) -> bool {
        variant.backend() != Backend::Accel
    }

    fn set_up(&mut self, init: &mut DataInit, params: &RunParams, variant: Variant) -> Result<()> {
        let n = params.size;
        let nn = n
            .checked_mul(n)
            .ok_or_else(|| Error::invalid_argument("size", format!("{n}² overflows usize")))?;
        let align = params.align;

        self.n = n;
        self.tmp = Some(init.alloc_and_init_const(n, align, 0.0, variant)?);
        self.x = Some(init.alloc_and_init::<Real>(n, align, variant)?);
        self.a = Some(init.alloc_and_init::<Real>(nn, align, variant)?);
        self.y = Some(init.alloc_and_init_const(n, align, 0.0, variant)?);
        Ok(())
    }

    fn run_variant(
        &mut self,
        variant: Variant,
        params: &RunParams,
        timer: &mut RunTimer,
    ) -> Result<()> {
        let n = self.n;
        let not_ready = || Error::invalid_argument("kernel", "POLYBENCH_ATAX run before set_up");
        let a = self.a.as_deref().ok_or_else(not_ready)?;
        let x = self.x.as_deref().ok_or_else(not_ready)?;
        let y = self.y.as_deref_mut().ok_or_else(not_ready)?;
        let tmp = self.tmp.as_deref_mut().ok_or_else(not_ready)?;

        match (variant.backend(), variant.style()) {
            (Backend::Seq, Style::Base) => {
                timer.start();
                for _ in 0..params.reps {
                    for i in 0..n {
                        let mut dot = 0.0;
                        for j in 0..n {
                            dot += a[j + i * n] * x[j];
                        }
                        tmp[i] = dot;
                    }
                    for j in 0..n {
                        let mut dot = 0.0;
                        for i in 0..n {
                            dot += a[j + i * n] * tmp[i];
                        }
                        y[j] = dot;
                    }
                }
                timer.stop();
            }
            (Backend::Seq, Style::Lambda) => {
                let body2 = |i: usize, j: usize, dot: &mut Real| *dot += a[j + i * n] * x[j];
                let body5 = |i: usize, j: usize, tmp: &[Real], dot: &mut Real| {
                    *dot += a[j + i * n] * tmp[i]
                };

                timer.start();
                for _ in 0..params.reps {
                    for i in 0..n {
                        let mut dot = 0.0;
                        for j in 0..n {
                            body2(i, j, &mut dot);
                        }
                        tmp[i] = dot;
                    }
                    for j in 0..n {
                        let mut dot = 0.0;
                        for i in 0..n {
                            body5(i, j, &*tmp, &mut dot);
                        }
                        y[j] = dot;
                    }
                }
                timer.stop();
            }
            (Backend::Accel, _) => {
                return Err(Error::UnsupportedVariant {
                    kernel: "POLYBENCH_ATAX",
                    variant: variant.name(),
                });
            }
            _ => {
                let sched = SchedulerKind::for_variant(variant, params.parallelism)?;

                timer.start();
                for _ in 0..params.reps {
                    sched.fill_indexed(tmp, |i| row_dot(a, x, n, i));
                    let tmp_ro: &[Real] = &*tmp;
                    sched.fill_indexed(y, |j| col_dot(a, tmp_ro, n, j));
                }
                timer.stop();
            }
        }

        Ok(())
    }

    fn checksum(&self) -> f64 {
        self.y.as_deref().map_or(0.0, |y| checksum(y, CHECKSUM_SCALE))
    }

    fn tear_down(&mut self, variant: Variant) {
        deallocate(&mut self.a, variant);
        deallocate(&mut self.x, variant);
        deallocate(&mut self.y, variant);
        deallocate(&mut self.tmp, variant);
    }
}
