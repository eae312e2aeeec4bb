use std::ffi::c_void;

/// Allocates `size` bytes whose starting address is a multiple of `alignment`.
///
/// This delegates to the CRT's `_aligned_malloc`, which takes its arguments
/// as `(size, alignment)`, the reverse of this function's order; the swap
/// happens inside this forwarding call.
///
/// # Arguments
///
/// * `alignment` - The required byte boundary. `_aligned_malloc` requires a
///   power of two; no validation is performed here, an unsatisfiable value
///   makes the call fail.
/// * `size` - The number of bytes to allocate. A zero size is passed through
///   unchanged; `_aligned_malloc` documents it as an invalid parameter, so
///   expect null back.
///
/// # Returns
///
/// A pointer to the allocated block, or null if the allocation failed.
///
/// # Safety
///
/// The returned pointer must be released with [`free`] exactly once and never
/// used afterwards - blocks from `_aligned_malloc` must not be passed to the
/// ordinary deallocator. The block's contents are uninitialized.
pub fn allocate(alignment: usize, size: usize) -> *mut c_void {
    // _aligned_malloc takes (size, alignment)
    unsafe { libc::aligned_malloc(size, alignment) }
}

/// Releases a block previously returned by [`allocate`].
///
/// Blocks from `_aligned_malloc` can only be released with `_aligned_free`,
/// which this forwards to.
///
/// # Safety
///
/// `ptr` must have been returned by [`allocate`] and not yet released. The
/// pointer is invalid for any further use after this call.
pub unsafe fn free(ptr: *mut c_void) {
    unsafe { libc::aligned_free(ptr) }
}
