use std::ffi::c_void;

/// Allocates `size` bytes whose starting address is a multiple of `alignment`.
///
/// Apple platforms provide no native `memalign`; this uses `posix_memalign`
/// instead and translates its status-code convention into the null-on-failure
/// convention used by every other platform build.
///
/// # Arguments
///
/// * `alignment` - The required byte boundary. `posix_memalign` requires a
///   power of two that is also a multiple of the pointer size; no validation
///   is performed here, an unsatisfiable value makes the call fail.
/// * `size` - The number of bytes to allocate. A zero size is passed through
///   unchanged; what comes back for it is platform-defined.
///
/// # Returns
///
/// A pointer to the allocated block, or null if the allocation failed.
///
/// # Safety
///
/// The returned pointer must be released with [`free`] exactly once and never
/// used afterwards. The block's contents are uninitialized.
pub fn allocate(alignment: usize, size: usize) -> *mut c_void {
    posix_memalign_or_null(alignment, size)
}

/// Adapts `posix_memalign`'s out-parameter/status-code contract to a plain
/// pointer return: zero status yields the written-out address, any non-zero
/// status yields null.
fn posix_memalign_or_null(alignment: usize, size: usize) -> *mut c_void {
    let mut ptr: *mut c_void = std::ptr::null_mut();
    let status = unsafe { libc::posix_memalign(&mut ptr, alignment, size) };
    if status == 0 { ptr } else { std::ptr::null_mut() }
}

/// Releases a block previously returned by [`allocate`].
///
/// Blocks from `posix_memalign` are compatible with the ordinary deallocator,
/// so this forwards to `free`.
///
/// # Safety
///
/// `ptr` must have been returned by [`allocate`] and not yet released. The
/// pointer is invalid for any further use after this call.
pub unsafe fn free(ptr: *mut c_void) {
    unsafe { libc::free(ptr) }
}
