//! First-touch placement pass
//!
//! On thread-pool back-ends, pages are placed near the thread that first
//! writes them. Before the authoritative fill, the data layer may write a zero
//! to every element through the same scheduler the kernel will run on, so
//! later parallel loops find their data local. The pass finishes before the
//! fill starts and never changes the final contents.

use super::scheduler::Scheduler;
use super::variant::Variant;
use crate::dtype::Element;

/// Placeholder-write strategy applied before a fill
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FirstTouch {
    /// No placeholder pass
    Skip,
    /// Zero every element through the variant's scheduler
    #[cfg(feature = "rayon")]
    Parallel,
}

impl FirstTouch {
    /// Strategy for a variant: parallel on thread-pool back-ends, none elsewhere
    pub fn for_variant(variant: Variant) -> Self {
        match variant.backend() {
            #[cfg(feature = "rayon")]
            super::variant::Backend::Threads => Self::Parallel,
            _ => Self::Skip,
        }
    }

    /// Apply the placeholder pass to `data` using `scheduler`'s workers
    #[cfg_attr(not(feature = "rayon"), allow(unused_variables))]
    pub fn touch<T: Element, S: Scheduler>(self, data: &mut [T], scheduler: &S) {
        match self {
            Self::Skip => {}
            #[cfg(feature = "rayon")]
            Self::Parallel => scheduler.fill_indexed(data, |_| T::zeroed()),
        }
    }
}
