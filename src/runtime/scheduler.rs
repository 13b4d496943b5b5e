//! Loop schedulers
//!
//! A scheduler runs a per-index closure over an output slice. Kernels hand
//! their loop bodies to a scheduler instead of spelling out each back-end's
//! loop construct. Every scheduler evaluates `f(i)` exactly once per index and
//! writes it to `out[i]`; only the order and the threads differ, so results
//! are identical across schedulers as long as `f` is pure.

use super::variant::{Backend, Variant};
use crate::error::Result;
#[cfg(feature = "rayon")]
use crate::error::Error;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "rayon")]
use parking_lot::Mutex;
#[cfg(feature = "rayon")]
use std::collections::BTreeMap;
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// Thread-pool settings for the threaded back-end
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParallelismConfig {
    /// Worker count; `None` uses the global rayon pool
    pub max_threads: Option<usize>,
    /// Smallest index range handed to one worker; `None` uses the default
    pub min_len: Option<usize>,
}

impl ParallelismConfig {
    /// Default minimum range per worker
    pub const DEFAULT_MIN_LEN: usize = 256;

    /// Create a config
    pub fn new(max_threads: Option<usize>, min_len: Option<usize>) -> Self {
        Self {
            max_threads,
            min_len,
        }
    }

    /// Effective minimum range per worker
    pub fn min_len(&self) -> usize {
        self.min_len.unwrap_or(Self::DEFAULT_MIN_LEN).max(1)
    }
}

/// Runs element-wise operations over an index range
pub trait Scheduler: Send + Sync {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Set `out[i] = f(i)` for every index of `out`
    fn fill_indexed<T, F>(&self, out: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send;
}

/// Plain sequential loop
#[derive(Copy, Clone, Debug, Default)]
pub struct SeqScheduler;

impl Scheduler for SeqScheduler {
    fn name(&self) -> &'static str {
        "seq"
    }

    fn fill_indexed<T, F>(&self, out: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        for (i, o) in out.iter_mut().enumerate() {
            *o = f(i);
        }
    }
}

/// Sequential loop over fixed-width lanes
///
/// The inner loop has a constant trip count so the compiler can vectorize it.
#[derive(Copy, Clone, Debug, Default)]
pub struct SimdScheduler;

impl SimdScheduler {
    /// Elements per lane group (f64 × 8 = one AVX-512 register)
    pub const LANES: usize = 8;
}

impl Scheduler for SimdScheduler {
    fn name(&self) -> &'static str {
        "simd"
    }

    fn fill_indexed<T, F>(&self, out: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        let mut chunks = out.chunks_exact_mut(Self::LANES);
        let mut base = 0;
        for chunk in &mut chunks {
            for (lane, o) in chunk.iter_mut().enumerate() {
                *o = f(base + lane);
            }
            base += Self::LANES;
        }
        for (lane, o) in chunks.into_remainder().iter_mut().enumerate() {
            *o = f(base + lane);
        }
    }
}

/// Dedicated pools keyed by worker count
///
/// Every scheduler built for the same worker count runs on the same pool, so
/// the first-touch pass and the kernel loops see the same threads.
#[cfg(feature = "rayon")]
static POOLS: Mutex<BTreeMap<usize, Arc<rayon::ThreadPool>>> =
    parking_lot::const_mutex(BTreeMap::new());

#[cfg(feature = "rayon")]
fn shared_pool(threads: usize) -> Result<Arc<rayon::ThreadPool>> {
    let mut pools = POOLS.lock();
    if let Some(pool) = pools.get(&threads) {
        return Ok(Arc::clone(pool));
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::VariantUnavailable {
            variant: "Threads",
            reason: e.to_string(),
        })?;
    let pool = Arc::new(pool);
    pools.insert(threads, Arc::clone(&pool));
    tracing::debug!(threads, "thread_pool_created");
    Ok(pool)
}

/// Parallel loop on a rayon pool
#[cfg(feature = "rayon")]
#[derive(Clone, Debug)]
pub struct RayonScheduler {
    pool: Option<Arc<rayon::ThreadPool>>,
    min_len: usize,
}

#[cfg(feature = "rayon")]
impl RayonScheduler {
    /// Build a scheduler; runs on the shared dedicated pool for
    /// `max_threads` when set, otherwise on the global pool
    pub fn new(config: ParallelismConfig) -> Result<Self> {
        let pool = match config.max_threads {
            Some(n) => Some(shared_pool(n)?),
            None => None,
        };
        Ok(Self {
            pool,
            min_len: config.min_len(),
        })
    }

    /// Number of worker threads
    pub fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Whether both schedulers run on the same worker threads
    pub fn shares_pool_with(&self, other: &Self) -> bool {
        match (&self.pool, &other.pool) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

#[cfg(feature = "rayon")]
impl Scheduler for RayonScheduler {
    fn name(&self) -> &'static str {
        "rayon"
    }

    fn fill_indexed<T, F>(&self, out: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        let min_len = self.min_len;
        self.install(|| {
            out.par_iter_mut()
                .with_min_len(min_len)
                .enumerate()
                .for_each(|(i, o)| *o = f(i));
        });
    }
}

/// Scheduler chosen from a variant's back-end
#[derive(Clone, Debug)]
pub enum SchedulerKind {
    /// Sequential
    Seq(SeqScheduler),
    /// Lane-chunked sequential
    Simd(SimdScheduler),
    /// Thread pool
    #[cfg(feature = "rayon")]
    Rayon(RayonScheduler),
}

impl SchedulerKind {
    /// Scheduler for `variant`
    ///
    /// Fails with `VariantUnavailable` for back-ends this build cannot drive.
    pub fn for_variant(variant: Variant, config: ParallelismConfig) -> Result<Self> {
        variant.ensure_available()?;
        match variant.backend() {
            Backend::Seq => Ok(Self::Seq(SeqScheduler)),
            Backend::Simd => Ok(Self::Simd(SimdScheduler)),
            #[cfg(feature = "rayon")]
            Backend::Threads => Ok(Self::Rayon(RayonScheduler::new(config)?)),
            #[cfg(not(feature = "rayon"))]
            Backend::Threads => {
                let _ = config;
                unreachable!("ensure_available rejects Threads without rayon")
            }
            Backend::Accel => unreachable!("ensure_available rejects Accel"),
        }
    }
}

impl Scheduler for SchedulerKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Seq(s) => s.name(),
            Self::Simd(s) => s.name(),
            #[cfg(feature = "rayon")]
            Self::Rayon(s) => s.name(),
        }
    }

    fn fill_indexed<T, F>(&self, out: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        match self {
            Self::Seq(s) => s.fill_indexed(out, f),
            Self::Simd(s) => s.fill_indexed(out, f),
            #[cfg(feature = "rayon")]
            Self::Rayon(s) => s.fill_indexed(out, f),
        }
    }
}
