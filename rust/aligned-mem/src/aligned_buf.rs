//! Owned buffer over the aligned-allocation facade.
//!
//! This module provides `AlignedBuf`, a safe RAII owner for a single block
//! obtained from [`crate::memalign`]. The raw facade hands out bare pointers
//! and leaves the release discipline to the caller; `AlignedBuf` ties the
//! release to `Drop` and exposes the block through checked slice views.

use std::ffi::c_void;

use crate::memalign;

/// An owned, aligned block of heap memory.
///
/// The block is allocated through the platform strategy selected at build
/// time and released exactly once when the buffer is dropped. Contents are
/// zeroed on allocation.
pub struct AlignedBuf {
    /// Raw pointer to the allocated block.
    ptr: *mut u8,
    /// The requested size of the buffer in bytes.
    len: usize,
    /// The alignment the block was allocated with.
    alignment: usize,
}

impl AlignedBuf {
    /// Allocates a zero-filled buffer of `size` bytes aligned to `alignment`.
    ///
    /// Alignments smaller than the pointer size are raised to it, since the
    /// POSIX aligned allocator rejects them; the effective value is reported
    /// by [`alignment`](Self::alignment). A zero `size` still allocates a
    /// minimal block so the buffer always owns real memory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `alignment` is zero or not a power of two,
    /// and `OutOfMemory` if the platform allocator reports failure.
    pub fn allocate(alignment: usize, size: usize) -> std::io::Result<AlignedBuf> {
        if alignment == 0 || !alignment.is_power_of_two() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "alignment must be a power of two",
            ));
        }
        let alignment = alignment.max(size_of::<*mut c_void>());

        let ptr = memalign::allocate(alignment, size.max(1));
        if ptr.is_null() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::OutOfMemory,
                "aligned allocation failed",
            ));
        }
        assert!((ptr as usize).is_multiple_of(alignment));

        // The facade hands the block back uninitialized; zero it so the safe
        // slice views never observe uninitialized memory.
        unsafe { std::ptr::write_bytes(ptr.cast::<u8>(), 0, size.max(1)) };

        Ok(AlignedBuf {
            ptr: ptr.cast(),
            len: size,
            alignment,
        })
    }

    /// Returns the length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer has a length of 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a raw pointer to the beginning of the block.
    ///
    /// # Safety
    ///
    /// The caller must ensure that:
    /// - The pointer is not used after the `AlignedBuf` is dropped
    /// - Any access to the memory region is within bounds (0..len)
    /// - Proper synchronization is used for concurrent access
    #[inline]
    pub fn ptr(&self) -> *mut u8 {
        self.ptr
    }

    /// Returns the alignment of the buffer in bytes.
    ///
    /// This is the alignment the block was allocated with: the requested
    /// value, raised to the pointer size if it was smaller.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Returns an immutable byte slice view of the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }

    /// Returns a mutable byte slice view of the buffer contents.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr, self.len) }
    }

    /// Returns an immutable slice of type `T` over the buffer's memory.
    ///
    /// The element count is `self.len() / size_of::<T>()`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer's length is not evenly divisible by the size of
    /// `T`, or if the buffer's alignment does not satisfy `T`'s.
    #[inline]
    pub fn as_slice<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        bytemuck::cast_slice(self.as_bytes())
    }

    /// Returns a mutable slice of type `T` over the buffer's memory.
    ///
    /// The element count is `self.len() / size_of::<T>()`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer's length is not evenly divisible by the size of
    /// `T`, or if the buffer's alignment does not satisfy `T`'s.
    #[inline]
    pub fn as_mut_slice<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        bytemuck::cast_slice_mut(self.as_bytes_mut())
    }
}

impl std::ops::Deref for AlignedBuf {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl std::ops::DerefMut for AlignedBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_bytes_mut()
    }
}

impl AsRef<[u8]> for AlignedBuf {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for AlignedBuf {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl Drop for AlignedBuf {
    /// Releases the block through the platform release primitive.
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe { memalign::free(self.ptr.cast::<c_void>()) };
        }
    }
}

// SAFETY: AlignedBuf can be safely sent between threads as it owns the block
// and releases it on drop.
unsafe impl Send for AlignedBuf {}

// SAFETY: AlignedBuf can be safely shared between threads. However, users must
// ensure proper synchronization when accessing the underlying memory.
unsafe impl Sync for AlignedBuf {}

impl std::fmt::Debug for AlignedBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .field("alignment", &self.alignment)
            .finish()
    }
}
