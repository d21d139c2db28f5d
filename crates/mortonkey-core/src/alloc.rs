//! Checked allocation for the transient buffers of a comparison.
//!
//! Every buffer the pipeline creates goes through [`try_filled`], which
//! reserves capacity with [`Vec::try_reserve_exact`] and reports failure as
//! [`Error::AllocationFailure`] instead of aborting the process. Buffers are
//! plain `Vec`s, so they are released when the owning value drops, on both
//! the success and the error path.

use crate::error::{Error, Result};

/// Allocates a vector of `len` copies of `value`.
///
/// # Errors
///
/// Returns [`Error::AllocationFailure`] if the byte size overflows `usize`
/// or the allocator refuses the request.
pub fn try_filled<T: Clone>(what: &'static str, len: usize, value: T) -> Result<Vec<T>> {
    let bytes = len
        .checked_mul(std::mem::size_of::<T>())
        .ok_or(Error::AllocationFailure {
            what,
            bytes: usize::MAX,
        })?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { what, bytes })?;
    buf.resize(len, value);
    Ok(buf)
}

/// Allocates an empty vector with room for exactly `capacity` elements.
///
/// # Errors
///
/// Returns [`Error::AllocationFailure`] if the reservation fails.
pub fn try_with_capacity<T>(what: &'static str, capacity: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailure {
            what,
            bytes: capacity.saturating_mul(std::mem::size_of::<T>()),
        })?;
    Ok(buf)
}
