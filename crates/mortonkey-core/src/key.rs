//! Serialized spatial key codec.
//!
//! # Format
//!
//! ```text
//! [dim: u16][min_0: f64][max_0: f64] ... [min_{dim-1}: f64][max_{dim-1}: f64]
//! ```
//!
//! All fields use native byte order with no padding, matching what the
//! storage layer hands to the comparator.

use crate::alloc;
use crate::bbox::BoundingBox;
use crate::error::{Error, Result};

/// Size of the leading dimension count.
pub const DIM_HEADER_SIZE: usize = std::mem::size_of::<u16>();

const COORD_SIZE: usize = std::mem::size_of::<f64>();

/// Byte length of a serialized key with `dim` dimensions.
#[must_use]
#[inline]
pub const fn encoded_len(dim: u16) -> usize {
    DIM_HEADER_SIZE + 2 * COORD_SIZE * dim as usize
}

/// Reads the dimension count without decoding the coordinates.
///
/// # Errors
///
/// Returns [`Error::MalformedKey`] if the key is shorter than the header.
pub fn peek_dim(key: &[u8]) -> Result<u16> {
    match key.get(..DIM_HEADER_SIZE) {
        Some(&[lo, hi]) => Ok(u16::from_ne_bytes([lo, hi])),
        _ => Err(Error::MalformedKey(format!(
            "key is {} bytes, too short for the dimension header",
            key.len()
        ))),
    }
}

/// Decodes a serialized key into its bounding box.
///
/// # Errors
///
/// - [`Error::MalformedKey`] if the key length is not exactly
///   [`encoded_len`] of its declared dimension.
/// - [`Error::EmptyDimension`] if the key declares zero dimensions.
/// - [`Error::AllocationFailure`] if the coordinate buffer cannot be reserved.
pub fn decode_key(key: &[u8]) -> Result<BoundingBox> {
    let dim = peek_dim(key)?;
    if dim == 0 {
        return Err(Error::EmptyDimension);
    }
    let expected = encoded_len(dim);
    if key.len() != expected {
        return Err(Error::MalformedKey(format!(
            "key declares {dim} dimensions ({expected} bytes) but is {} bytes",
            key.len()
        )));
    }

    let mut coords = alloc::try_with_capacity("key coordinates", 2 * usize::from(dim))?;
    coords.extend(key[DIM_HEADER_SIZE..].chunks_exact(COORD_SIZE).map(|chunk| {
        let mut raw = [0u8; COORD_SIZE];
        raw.copy_from_slice(chunk);
        f64::from_ne_bytes(raw)
    }));
    BoundingBox::new(coords)
}

/// Serializes a bounding box into the key layout read by [`decode_key`].
///
/// # Errors
///
/// Returns [`Error::AllocationFailure`] if the output buffer cannot be reserved.
pub fn encode_key(bbox: &BoundingBox) -> Result<Vec<u8>> {
    let dim = bbox.dim();
    let mut out = alloc::try_with_capacity("serialized key", encoded_len(dim))?;
    out.extend_from_slice(&dim.to_ne_bytes());
    for coord in bbox.as_slice() {
        out.extend_from_slice(&coord.to_ne_bytes());
    }
    Ok(out)
}
