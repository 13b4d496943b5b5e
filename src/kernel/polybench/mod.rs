//! PolyBench kernels

mod atax;

pub use atax::PolybenchAtax;
