//! Run parameters

use crate::runtime::{DEFAULT_ALIGN, ParallelismConfig, Variant};

/// Problem size, repetitions and variants for a suite run
#[derive(Clone, Debug, PartialEq)]
pub struct RunParams {
    /// Problem size (kernel-specific meaning, e.g. matrix order)
    pub size: usize,
    /// Timed repetitions per variant
    pub reps: usize,
    /// Buffer alignment in bytes
    pub align: usize,
    /// Variants to run, in order
    pub variants: Vec<Variant>,
    /// Requested variant names that did not parse
    pub unknown_variants: Vec<String>,
    /// Thread-pool settings for threaded variants
    pub parallelism: ParallelismConfig,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            size: 1000,
            reps: 10,
            align: DEFAULT_ALIGN,
            variants: Variant::available().collect(),
            unknown_variants: Vec::new(),
            parallelism: ParallelismConfig::default(),
        }
    }
}

impl RunParams {
    /// Set the problem size
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the repetition count
    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    /// Set the buffer alignment
    pub fn with_align(mut self, align: usize) -> Self {
        self.align = align;
        self
    }

    /// Run exactly these variants
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.variants = variants.into_iter().collect();
        self.unknown_variants.clear();
        self
    }

    /// Run the named variants
    ///
    /// Names that do not parse are kept in `unknown_variants` so the suite can
    /// report them instead of silently dropping them.
    pub fn with_variant_names<S: AsRef<str>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.variants.clear();
        self.unknown_variants.clear();
        for name in names {
            let name = name.as_ref();
            match name.parse::<Variant>() {
                Ok(v) => self.variants.push(v),
                Err(_) => self.unknown_variants.push(name.to_string()),
            }
        }
        self
    }

    /// Set thread-pool settings
    pub fn with_parallelism(mut self, parallelism: ParallelismConfig) -> Self {
        self.parallelism = parallelism;
        self
    }
}
