//! Bit interleaving of grid coordinates into Morton codes.
//!
//! # Layout
//!
//! A code for `dim` coordinates is `4 * dim` bytes, addressed as `32 * dim`
//! bits. Bit index `b` (0 = least significant overall) lives in byte
//! `len - 1 - b / 8` at position `b % 8`, so the most significant bit of
//! the code sits in the first byte and plain lexicographic byte comparison
//! equals numeric comparison of the whole code.
//!
//! Source bit `p` of coordinate `values[dim - 1 - j]` lands on output bit
//! `p * dim + j`. Dimension 0 therefore owns the highest lane of every
//! `dim`-bit group and wins ties against the other dimensions.

use crate::alloc;
use crate::error::{Error, Result};
use crate::grid::GridPoint;

/// Bytes contributed by each coordinate.
pub const BYTES_PER_COORD: usize = std::mem::size_of::<u32>();

/// Exclusive upper bound on the number of interleaved dimensions.
pub const MAX_INTERLEAVE_DIM: usize = 16384;

/// Interleaved grid coordinates, ordered lexicographically by byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MortonCode(Vec<u8>);

impl MortonCode {
    /// Raw big-endian code bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes (`4 * dim`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the code of a zero-dimensional point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the code, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Sets bit `bit` of `buffer`, counting from the least significant bit of
/// the last byte.
///
/// # Panics
///
/// Panics if `bit >= 8 * buffer.len()`.
#[inline]
pub fn set_bit(buffer: &mut [u8], bit: usize) {
    let byte = buffer.len() - 1 - bit / 8;
    buffer[byte] |= 1 << (bit % 8);
}

/// Interleaves `dim` grid coordinates into a Morton code.
///
/// # Errors
///
/// - [`Error::DimensionOverflow`] if `dim >= MAX_INTERLEAVE_DIM`.
/// - [`Error::DimensionMismatch`] if `values.len() != dim`.
/// - [`Error::AllocationFailure`] if the code buffer cannot be reserved.
pub fn interleave(values: &[u32], dim: u16) -> Result<MortonCode> {
    let dim = usize::from(dim);
    if dim >= MAX_INTERLEAVE_DIM {
        return Err(Error::DimensionOverflow {
            dim,
            max: MAX_INTERLEAVE_DIM,
        });
    }
    if values.len() != dim {
        return Err(Error::DimensionMismatch {
            expected: dim,
            actual: values.len(),
        });
    }

    let mut bytes = alloc::try_filled("morton code", BYTES_PER_COORD * dim, 0u8)?;
    for p in 0..u32::BITS as usize {
        for (j, &value) in values.iter().rev().enumerate() {
            if (value >> p) & 1 == 1 {
                set_bit(&mut bytes, p * dim + j);
            }
        }
    }
    Ok(MortonCode(bytes))
}

/// Interleaves a projected grid point.
///
/// # Errors
///
/// Same as [`interleave`].
pub fn encode(point: &GridPoint) -> Result<MortonCode> {
    let dim = u16::try_from(point.dim()).map_err(|_| Error::DimensionOverflow {
        dim: point.dim(),
        max: MAX_INTERLEAVE_DIM,
    })?;
    interleave(point.as_slice(), dim)
}
