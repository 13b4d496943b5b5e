//! Aligned host allocation for benchmark buffers
//!
//! Buffers are zero-filled on allocation so every element is a valid value
//! before any fill policy runs (element types are `Zeroable`).

use super::variant::Variant;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::alloc::{Layout as AllocLayout, alloc_zeroed, dealloc};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

/// Default alignment for kernel buffers (AVX-512 width)
pub const DEFAULT_ALIGN: usize = 64;

/// A contiguous, aligned, exclusively owned buffer of `T`
pub struct AlignedBuffer<T: Element> {
    ptr: NonNull<T>,
    len: usize,
    align: usize,
}

// SAFETY: the buffer owns its allocation exclusively, like a Vec<T>.
unsafe impl<T: Element> Send for AlignedBuffer<T> {}
unsafe impl<T: Element> Sync for AlignedBuffer<T> {}

impl<T: Element> AlignedBuffer<T> {
    /// Allocate `len` zeroed elements aligned to `align` bytes
    ///
    /// `align` must be a power of two no smaller than the element alignment.
    /// A length of zero yields a valid empty buffer without touching the
    /// allocator.
    pub fn zeroed(len: usize, align: usize) -> Result<Self> {
        if !align.is_power_of_two() {
            return Err(Error::invalid_argument(
                "align",
                format!("{align} is not a power of two"),
            ));
        }
        if align < std::mem::align_of::<T>() {
            return Err(Error::invalid_argument(
                "align",
                format!(
                    "{align} is smaller than the {} element alignment {}",
                    T::DTYPE,
                    std::mem::align_of::<T>()
                ),
            ));
        }

        if len == 0 {
            // No allocation; the address only has to be non-null and aligned.
            let ptr = NonNull::new(std::ptr::without_provenance_mut::<T>(align))
                .ok_or(Error::OutOfMemory { size: 0 })?;
            return Ok(Self { ptr, len, align });
        }

        let size = len
            .checked_mul(T::DTYPE.size_in_bytes())
            .ok_or(Error::OutOfMemory { size: usize::MAX })?;
        let layout =
            AllocLayout::from_size_align(size, align).map_err(|_| Error::OutOfMemory { size })?;

        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(raw as *mut T).ok_or(Error::OutOfMemory { size })?;

        Ok(Self { ptr, len, align })
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Requested alignment in bytes
    #[inline]
    pub fn align(&self) -> usize {
        self.align
    }

    /// Element type tag
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Base address of the buffer
    #[inline]
    pub fn addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    /// Size of the buffer in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.len * T::DTYPE.size_in_bytes()
    }

    fn layout(&self) -> AllocLayout {
        // SAFETY: the same size/align pair was validated in `zeroed`.
        unsafe { AllocLayout::from_size_align_unchecked(self.size_in_bytes(), self.align) }
    }
}

impl<T: Element> Deref for AlignedBuffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        // SAFETY: ptr is valid for len initialized elements (or dangling-aligned for len 0).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> DerefMut for AlignedBuffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as in `deref`, and `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> Drop for AlignedBuffer<T> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        // SAFETY: ptr came from alloc_zeroed with this exact layout.
        unsafe { dealloc(self.ptr.as_ptr() as *mut u8, self.layout()) }
    }
}

impl<T: Element> fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("dtype", &T::DTYPE)
            .field("len", &self.len)
            .field("align", &self.align)
            .finish()
    }
}

/// Allocate a zeroed buffer of `len` elements for a kernel variant
///
/// The variant is accepted so device-aware allocators can route on it; the
/// host path ignores it.
pub fn allocate<T: Element>(
    len: usize,
    align: usize,
    variant: Variant,
) -> Result<AlignedBuffer<T>> {
    let buf = AlignedBuffer::zeroed(len, align)?;
    tracing::debug!(
        dtype = %T::DTYPE,
        len,
        align,
        variant = %variant,
        "buffer_allocated"
    );
    Ok(buf)
}

/// Release a buffer and clear the handle
///
/// Releasing an empty handle is a no-op, so cleanup can run unconditionally.
pub fn deallocate<T: Element>(handle: &mut Option<AlignedBuffer<T>>, variant: Variant) {
    if let Some(buf) = handle.take() {
        tracing::debug!(
            dtype = %T::DTYPE,
            len = buf.len(),
            variant = %variant,
            "buffer_deallocated"
        );
        drop(buf);
    }
}
