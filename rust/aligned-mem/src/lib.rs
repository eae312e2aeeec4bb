pub mod aligned_buf;

#[cfg_attr(windows, path = "memalign_win.rs")]
#[cfg_attr(target_vendor = "apple", path = "memalign_apple.rs")]
#[cfg_attr(
    all(unix, not(target_vendor = "apple")),
    path = "memalign_posix.rs"
)]
#[cfg_attr(not(any(unix, windows)), path = "memalign_fallback.rs")]
pub mod memalign;
