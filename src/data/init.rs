//! Deterministic buffer initialization
//!
//! `DataInit` owns the initialization counter and implements every fill
//! policy. Each call:
//!
//! 1. reads the fill factor from the counter,
//! 2. runs the variant's first-touch pass (if any) to completion, on the
//!    same scheduler the variant's kernels use,
//! 3. writes the authoritative values sequentially,
//! 4. advances the counter by exactly one.
//!
//! Randomized policies restart their generator from a fixed seed on every
//! call, so inputs are bit-identical across back-ends and runs.

use super::counter::InitCounter;
use super::random::SeededDraws;
use crate::dtype::{Complex, DType, Element, Int, Real};
use crate::error::Result;
use crate::runtime::{
    AlignedBuffer, FirstTouch, ParallelismConfig, SchedulerKind, Variant, allocate,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Sentinel written at the low outlier position of integer buffers
pub const INT_LOW_SENTINEL: Int = -58;
/// Sentinel written at the high outlier position of integer buffers
pub const INT_HIGH_SENTINEL: Int = 19;

/// Positional fill value: `factor · (i + 1.1) / (i + 1.12345)`
#[inline]
pub fn positional_value(factor: Real, i: usize) -> Real {
    factor * (i as Real + 1.1) / (i as Real + 1.12345)
}

#[inline]
fn positional_complex(factor: Complex, i: usize) -> Complex {
    factor * (i as Real + 1.1) / (i as Real + 1.12345)
}

/// Element types with a default fill policy
///
/// - `Int`: random ±1 with two outlier sentinels
/// - `Real`: positional values scaled by the real factor
/// - `Complex`: positional values scaled by the complex factor
pub trait InitElement: Element {
    /// Write the default fill for this type, using the counter's current factor
    fn fill_default(data: &mut [Self], counter: &InitCounter);
}

impl InitElement for Int {
    fn fill_default(data: &mut [Self], _counter: &InitCounter) {
        let mut draws = SeededDraws::reseeded();
        for v in data.iter_mut() {
            *v = draws.sign() as Int;
        }
        if data.is_empty() {
            return;
        }
        // +19 lands last so it wins when both draws pick the same index.
        let ilo = draws.index(data.len());
        data[ilo] = INT_LOW_SENTINEL;
        let ihi = draws.index(data.len());
        data[ihi] = INT_HIGH_SENTINEL;
    }
}

impl InitElement for Real {
    fn fill_default(data: &mut [Self], counter: &InitCounter) {
        let factor = counter.factor();
        for (i, v) in data.iter_mut().enumerate() {
            *v = positional_value(factor, i);
        }
    }
}

impl InitElement for Complex {
    fn fill_default(data: &mut [Self], counter: &InitCounter) {
        let factor = counter.complex_factor();
        for (i, v) in data.iter_mut().enumerate() {
            *v = positional_complex(factor, i);
        }
    }
}

/// Data initializer for one measurement session
#[derive(Clone, Debug)]
pub struct DataInit {
    counter: InitCounter,
    first_touch: bool,
    parallelism: ParallelismConfig,
}

/// Initializer shared between threads that set up kernels concurrently
pub type SharedDataInit = Arc<Mutex<DataInit>>;

impl Default for DataInit {
    fn default() -> Self {
        Self::new()
    }
}

impl DataInit {
    /// Initializer with a zero counter and first-touch enabled
    pub fn new() -> Self {
        Self {
            counter: InitCounter::new(),
            first_touch: true,
            parallelism: ParallelismConfig::default(),
        }
    }

    /// Place first-touch pages with the thread pool described by `parallelism`
    pub fn with_parallelism(mut self, parallelism: ParallelismConfig) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Switch the first-touch thread pool, e.g. before setting up a kernel
    pub fn set_parallelism(&mut self, parallelism: ParallelismConfig) {
        self.parallelism = parallelism;
    }

    /// Thread-pool settings used by the first-touch pass
    pub fn parallelism(&self) -> ParallelismConfig {
        self.parallelism
    }

    /// Disable the first-touch pass for every variant
    pub fn without_first_touch(mut self) -> Self {
        self.first_touch = false;
        self
    }

    /// Wrap in a mutex for concurrent kernel setup
    pub fn shared(self) -> SharedDataInit {
        Arc::new(Mutex::new(self))
    }

    /// Reset the counter to zero (start of a session or a kernel run)
    pub fn reset(&mut self) {
        self.counter.reset();
    }

    /// Advance the counter by one
    pub fn increment(&mut self) {
        self.counter.increment();
    }

    /// Number of completed initializations since the last reset
    pub fn count(&self) -> u64 {
        self.counter.count()
    }

    /// Read-only view of the counter
    pub fn counter(&self) -> &InitCounter {
        &self.counter
    }

    fn touch_pages<T: Element>(&self, data: &mut [T], variant: Variant) {
        if !self.first_touch {
            return;
        }
        let strategy = FirstTouch::for_variant(variant);
        if strategy == FirstTouch::Skip {
            return;
        }
        match SchedulerKind::for_variant(variant, self.parallelism) {
            Ok(sched) => strategy.touch(data, &sched),
            // Placement only; the fill below is still authoritative.
            Err(reason) => {
                tracing::warn!(variant = %variant, %reason, "first_touch_skipped");
            }
        }
    }

    fn finish(&mut self, policy: &'static str, dtype: DType, len: usize) {
        tracing::debug!(
            policy,
            dtype = %dtype,
            len,
            count = self.counter.count(),
            "data_initialized"
        );
        self.counter.increment();
    }

    /// Fill `data` with its type's default policy
    pub fn init<T: InitElement>(&mut self, data: &mut [T], variant: Variant) {
        self.touch_pages(data, variant);
        T::fill_default(data, &self.counter);
        self.finish("default", T::DTYPE, data.len());
    }

    /// Fill integers with random ±1 and the −58 / +19 outliers
    pub fn init_int(&mut self, data: &mut [Int], variant: Variant) {
        self.init(data, variant);
    }

    /// Fill reals with `factor · (i + 1.1) / (i + 1.12345)`
    pub fn init_real(&mut self, data: &mut [Real], variant: Variant) {
        self.init(data, variant);
    }

    /// Fill complex values with the complex factor times the positional ratio
    pub fn init_complex(&mut self, data: &mut [Complex], variant: Variant) {
        self.init(data, variant);
    }

    /// Fill every real with `value`
    pub fn init_real_const(&mut self, data: &mut [Real], value: Real, variant: Variant) {
        self.touch_pages(data, variant);
        data.fill(value);
        self.finish("const", Real::DTYPE, data.len());
    }

    /// Fill reals with positional values of random sign
    pub fn init_real_rand_sign(&mut self, data: &mut [Real], variant: Variant) {
        self.touch_pages(data, variant);
        let factor = self.counter.factor();
        let mut draws = SeededDraws::reseeded();
        for (i, v) in data.iter_mut().enumerate() {
            *v = draws.sign() * positional_value(factor, i);
        }
        self.finish("rand_sign", Real::DTYPE, data.len());
    }

    /// Fill reals with raw uniform draws in `[0, 1)`
    pub fn init_real_rand_value(&mut self, data: &mut [Real], variant: Variant) {
        self.touch_pages(data, variant);
        let mut draws = SeededDraws::reseeded();
        for v in data.iter_mut() {
            *v = draws.uniform();
        }
        self.finish("rand_value", Real::DTYPE, data.len());
    }

    /// Initialize a single real: `factor · 1.1 / 1.12345`
    pub fn init_scalar(&mut self, _variant: Variant) -> Real {
        let value = self.counter.factor() * 1.1 / 1.12345;
        self.finish("scalar", Real::DTYPE, 1);
        value
    }

    /// Allocate a buffer and fill it with its type's default policy
    pub fn alloc_and_init<T: InitElement>(
        &mut self,
        len: usize,
        align: usize,
        variant: Variant,
    ) -> Result<AlignedBuffer<T>> {
        let mut buf = allocate::<T>(len, align, variant)?;
        self.init(&mut buf[..], variant);
        Ok(buf)
    }

    /// Allocate a real buffer filled with `value`
    pub fn alloc_and_init_const(
        &mut self,
        len: usize,
        align: usize,
        value: Real,
        variant: Variant,
    ) -> Result<AlignedBuffer<Real>> {
        let mut buf = allocate::<Real>(len, align, variant)?;
        self.init_real_const(&mut buf, value, variant);
        Ok(buf)
    }

    /// Allocate a real buffer with random-sign positional values
    pub fn alloc_and_init_rand_sign(
        &mut self,
        len: usize,
        align: usize,
        variant: Variant,
    ) -> Result<AlignedBuffer<Real>> {
        let mut buf = allocate::<Real>(len, align, variant)?;
        self.init_real_rand_sign(&mut buf, variant);
        Ok(buf)
    }

    /// Allocate a real buffer with uniform random values
    pub fn alloc_and_init_rand_value(
        &mut self,
        len: usize,
        align: usize,
        variant: Variant,
    ) -> Result<AlignedBuffer<Real>> {
        let mut buf = allocate::<Real>(len, align, variant)?;
        self.init_real_rand_value(&mut buf, variant);
        Ok(buf)
    }
}
