use std::ffi::c_void;

/// Allocates `size` bytes whose starting address is a multiple of `alignment`.
///
/// This delegates directly to the platform's native `memalign`, which takes
/// its arguments in the same `(alignment, size)` order as this function.
///
/// # Arguments
///
/// * `alignment` - The required byte boundary. The platform contract requires
///   a power of two; no validation is performed here, an unsatisfiable value
///   is simply rejected by the allocator.
/// * `size` - The number of bytes to allocate. A zero size is passed through
///   unchanged; what comes back for it is platform-defined.
///
/// # Returns
///
/// A pointer to the allocated block, or null if the platform allocator
/// reports failure (out of memory, invalid alignment).
///
/// # Safety
///
/// The returned pointer must be released with [`free`] exactly once and never
/// used afterwards. The block's contents are uninitialized.
pub fn allocate(alignment: usize, size: usize) -> *mut c_void {
    unsafe { libc::memalign(alignment, size) }
}

/// Releases a block previously returned by [`allocate`].
///
/// Blocks from the native `memalign` are compatible with the ordinary
/// deallocator, so this forwards to `free`.
///
/// # Safety
///
/// `ptr` must have been returned by [`allocate`] and not yet released. The
/// pointer is invalid for any further use after this call.
pub unsafe fn free(ptr: *mut c_void) {
    unsafe { libc::free(ptr) }
}
