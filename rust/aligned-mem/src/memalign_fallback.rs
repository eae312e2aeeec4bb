use std::alloc::{Layout, alloc, dealloc};
use std::ffi::c_void;

/// Allocation bookkeeping stored immediately ahead of the block handed out,
/// so that [`free`] can reconstruct the layout without out-of-band state.
#[derive(Clone, Copy)]
struct Header {
    size: usize,
    alignment: usize,
}

/// Allocates `size` bytes aligned to `alignment` (emulated via `std::alloc`).
pub fn allocate(alignment: usize, size: usize) -> *mut c_void {
    let Some((layout, offset)) = block_layout(alignment, size) else {
        return std::ptr::null_mut();
    };
    let base = unsafe { alloc(layout) };
    if base.is_null() {
        return std::ptr::null_mut();
    }
    unsafe {
        let block = base.add(offset);
        block.cast::<Header>().sub(1).write(Header { size, alignment });
        block.cast()
    }
}

/// Releases a block previously returned by [`allocate`].
///
/// # Safety
///
/// `ptr` must have been returned by [`allocate`] and not yet released.
pub unsafe fn free(ptr: *mut c_void) {
    unsafe {
        let header = ptr.cast::<Header>().sub(1).read();
        let align = header.alignment.max(align_of::<Header>());
        let offset = size_of::<Header>().next_multiple_of(align);
        // Same layout the allocation was made with, already validated then.
        let layout = Layout::from_size_align_unchecked(offset + header.size, align);
        dealloc(ptr.cast::<u8>().sub(offset), layout);
    }
}

/// Computes the layout of an allocation carrying a leading [`Header`], and
/// the offset from the base at which the aligned block starts. Returns `None`
/// for alignments the allocator cannot satisfy.
fn block_layout(alignment: usize, size: usize) -> Option<(Layout, usize)> {
    let align = alignment.max(align_of::<Header>());
    let offset = size_of::<Header>().next_multiple_of(align);
    let layout = Layout::from_size_align(offset.checked_add(size)?, align).ok()?;
    Some((layout, offset))
}
