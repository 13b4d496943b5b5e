//! Initialization counter
//!
//! Every fill advances the counter once. Its parity picks the fill factor, so
//! two buffers initialized back to back get different (but reproducible)
//! contents.

use crate::dtype::{Complex, Real};

/// Factor used on odd counts
pub const ODD_FACTOR: Real = 0.1;
/// Factor used on even counts (including a freshly reset counter)
pub const EVEN_FACTOR: Real = 0.2;
/// Complex factor used on odd counts
pub const ODD_COMPLEX_FACTOR: Complex = Complex::new(0.1, 0.2);
/// Complex factor used on even counts
pub const EVEN_COMPLEX_FACTOR: Complex = Complex::new(0.2, 0.3);

/// Count of completed initialization calls
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InitCounter {
    count: u64,
}

impl InitCounter {
    /// Counter at zero
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Set the counter back to zero
    #[inline]
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Advance by one completed initialization
    #[inline]
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Current count
    #[inline]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Real fill factor for the current count
    #[inline]
    pub const fn factor(&self) -> Real {
        if self.count % 2 == 1 {
            ODD_FACTOR
        } else {
            EVEN_FACTOR
        }
    }

    /// Complex fill factor for the current count
    #[inline]
    pub const fn complex_factor(&self) -> Complex {
        if self.count % 2 == 1 {
            ODD_COMPLEX_FACTOR
        } else {
            EVEN_COMPLEX_FACTOR
        }
    }
}
