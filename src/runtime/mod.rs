//! Execution back-ends and host memory
//!
//! This module names the execution variants a kernel can run under and
//! provides the pieces the data layer needs from a back-end: aligned host
//! allocation, the optional first-touch pass, and the scheduler seam that
//! runs an element-wise operation over an index range.
//!
//! # Architecture
//!
//! ```text
//! Variant (Base_Seq, Policy_Threads, ...)
//! ├── Backend (Seq / Simd / Threads / Accel)
//! ├── FirstTouch (placeholder pass chosen by backend)
//! └── Scheduler (runs per-index closures: Seq, Simd, Rayon)
//! ```

mod allocator;
mod first_touch;
pub mod scheduler;
pub mod variant;

pub use allocator::{AlignedBuffer, DEFAULT_ALIGN, allocate, deallocate};
pub use first_touch::FirstTouch;
pub use scheduler::{ParallelismConfig, Scheduler, SchedulerKind, SeqScheduler, SimdScheduler};
#[cfg(feature = "rayon")]
pub use scheduler::RayonScheduler;
pub use variant::{Backend, Style, Variant};
