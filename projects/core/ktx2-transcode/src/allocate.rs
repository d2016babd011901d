//! Memory allocation for transcoded texture data.
//!
//! The output of a transcode is handed straight to a GPU upload, so it is
//! allocated aligned to the processor's cache line size and zeroed before the
//! decoder sees it.
//!
//! ## Useful APIs
//!
//! [`allocate_cache_line_aligned`]: Allocates uninitialized memory aligned to the cache line.
//! [`allocate_zeroed_output`]: Allocates a zeroed, cache line aligned output buffer.
//!
//! ## Safety
//!
//! All allocation operations are wrapped in safe APIs that handle proper initialization,
//! cleanup, and error handling. Memory is automatically deallocated when the returned
//! [`RawAlloc`] is dropped.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::prelude::AllocError;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Cache line size used for output allocations.
///
/// x86/x86_64 and aarch64 mainstream parts use 64 byte lines; other
/// architectures use the same value as a conservative default.
pub const CACHE_LINE_SIZE: usize = 64;

/// Allocates data aligned to the processor's cache line size.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated (uninitialized) data
///
/// # Examples
///
/// ```
/// use ktx2_transcode::allocate::allocate_cache_line_aligned;
///
/// let allocation = allocate_cache_line_aligned(1024)?;
/// assert_eq!(allocation.as_ptr() as usize % 64, 0);
/// # Ok::<(), ktx2_transcode::allocate::AllocateError>(())
/// ```
pub fn allocate_cache_line_aligned(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, CACHE_LINE_SIZE)?;
    Ok(RawAlloc::new(layout)?)
}

/// Allocates a zeroed, cache line aligned buffer of `num_bytes` bytes.
///
/// Zeroing makes the whole buffer initialized memory, so it can be exposed as a
/// `&mut [u8]` to the decoder and as a `&[u8]` to the caller afterwards.
pub fn allocate_zeroed_output(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let mut allocation = allocate_cache_line_aligned(num_bytes)?;
    // SAFETY: `allocation` owns at least `num_bytes` writable bytes.
    unsafe {
        core::ptr::write_bytes(allocation.as_mut_ptr(), 0, num_bytes);
    }
    Ok(allocation)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}
