//! Three-way comparison of serialized spatial keys along the Z-order curve.
//!
//! Each key goes through decode, center, project and interleave; the two
//! resulting Morton codes are compared byte by byte. Every intermediate
//! buffer is owned by the call and dropped before it returns, on success
//! and on the first failure alike.
//!
//! # Example
//!
//! ```rust
//! use mortonkey_core::{compare, encode_key, BoundingBox, ScaleFactor};
//! use std::cmp::Ordering;
//!
//! let global = BoundingBox::from_ranges(&[(0.0, 100.0)])?;
//! let sf = ScaleFactor::build(&global, 1, 1000)?;
//!
//! let a = encode_key(&BoundingBox::from_ranges(&[(0.0, 0.0)])?)?;
//! let b = encode_key(&BoundingBox::from_ranges(&[(100.0, 100.0)])?)?;
//! assert_eq!(compare(&a, &b, &sf)?, Ordering::Less);
//! # Ok::<(), mortonkey_core::Error>(())
//! ```

use std::cmp::Ordering;

use crate::alloc;
use crate::center::center;
use crate::config::MortonKeyConfig;
use crate::error::{Error, Result};
use crate::grid::project;
use crate::key::decode_key;
use crate::morton::{interleave, MortonCode};
use crate::scale::ScaleFactor;

/// Ordering function over raw serialized keys.
///
/// Implementations must be total, antisymmetric and transitive over the
/// keys they accept so they can drive any ordered index or sort routine.
pub trait KeyComparator: Send + Sync {
    /// Compares two serialized keys.
    ///
    /// # Errors
    ///
    /// Returns an error if either key cannot be ordered.
    fn compare(&self, a: &[u8], b: &[u8]) -> Result<Ordering>;
}

/// Z-order comparator bound to a shared, read-only [`ScaleFactor`].
#[derive(Debug, Clone, Copy)]
pub struct SpatialKeyComparator<'a> {
    sf: &'a ScaleFactor,
    validate_boxes: bool,
}

impl<'a> SpatialKeyComparator<'a> {
    /// Creates a comparator that rejects inverted or NaN bounding boxes.
    #[must_use]
    pub fn new(sf: &'a ScaleFactor) -> Self {
        Self {
            sf,
            validate_boxes: true,
        }
    }

    /// Creates a comparator using the key settings from `config`.
    #[must_use]
    pub fn with_config(sf: &'a ScaleFactor, config: &MortonKeyConfig) -> Self {
        Self {
            sf,
            validate_boxes: config.keys.validate_boxes,
        }
    }

    /// Enables or disables the `min <= max` check on every key.
    ///
    /// With validation off, an inverted box still orders deterministically
    /// by its (out-of-range) center.
    #[must_use]
    pub fn validate_boxes(mut self, enabled: bool) -> Self {
        self.validate_boxes = enabled;
        self
    }

    /// Scale factor this comparator projects through.
    #[must_use]
    pub fn scale_factor(&self) -> &'a ScaleFactor {
        self.sf
    }

    /// Computes the Morton code of a serialized key.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedKey`] or [`Error::EmptyDimension`] if the key
    ///   cannot be decoded.
    /// - [`Error::DimensionMismatch`] if the key's dimension differs from
    ///   the scale factor's.
    /// - [`Error::InvalidBoundingBox`] if validation is on and the box is
    ///   inverted or contains NaN.
    /// - [`Error::AllocationFailure`] from any intermediate step.
    pub fn morton_code(&self, key: &[u8]) -> Result<MortonCode> {
        let bbox = decode_key(key).map_err(reject)?;
        if bbox.dim() != self.sf.dim() {
            return Err(reject(Error::DimensionMismatch {
                expected: usize::from(self.sf.dim()),
                actual: usize::from(bbox.dim()),
            }));
        }
        if self.validate_boxes {
            bbox.validate().map_err(reject)?;
        }

        let point = center(&bbox)?;
        let grid = project(&point, self.sf)?;
        interleave(grid.as_slice(), self.sf.dim())
    }

    /// Compares two serialized keys by Morton code.
    ///
    /// # Errors
    ///
    /// Same as [`SpatialKeyComparator::morton_code`], for either key.
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Result<Ordering> {
        let code_a = self.morton_code(a)?;
        let code_b = self.morton_code(b)?;
        Ok(code_a.cmp(&code_b))
    }

    /// Sorts serialized keys in Z-order.
    ///
    /// Each key is encoded once. Keys with equal codes keep their relative
    /// order. If any key fails to encode, `keys` is left untouched.
    ///
    /// # Errors
    ///
    /// The first error from [`SpatialKeyComparator::morton_code`], or
    /// [`Error::AllocationFailure`] for the sort buffers.
    pub fn sort_keys<K: AsRef<[u8]>>(&self, keys: &mut [K]) -> Result<()> {
        let mut codes = alloc::try_with_capacity("sort codes", keys.len())?;
        for key in keys.iter() {
            codes.push(self.morton_code(key.as_ref())?);
        }

        let mut order = alloc::try_with_capacity("sort order", keys.len())?;
        order.extend(0..keys.len());
        order.sort_by(|&a, &b| codes[a].cmp(&codes[b]));
        apply_permutation(keys, order);
        Ok(())
    }

    /// Parallel variant of [`SpatialKeyComparator::sort_keys`] running on
    /// the rayon global pool.
    ///
    /// Codes are encoded into a buffer reserved up front, so the parallel
    /// phase does not allocate beyond each key's own code.
    ///
    /// # Errors
    ///
    /// Same as [`SpatialKeyComparator::sort_keys`]. When several keys fail,
    /// the error of any one of them may be reported.
    #[cfg(feature = "parallel")]
    pub fn par_sort_keys<K>(&self, keys: &mut [K]) -> Result<()>
    where
        K: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;

        let mut codes = alloc::try_filled("sort codes", keys.len(), MortonCode::default())?;
        codes
            .par_iter_mut()
            .zip(keys.par_iter())
            .try_for_each(|(slot, key)| {
                *slot = self.morton_code(key.as_ref())?;
                Ok::<(), Error>(())
            })?;

        let mut order = alloc::try_with_capacity("sort order", keys.len())?;
        order.extend(0..keys.len());
        order.par_sort_by(|&a, &b| codes[a].cmp(&codes[b]));
        apply_permutation(keys, order);
        Ok(())
    }
}

impl KeyComparator for SpatialKeyComparator<'_> {
    fn compare(&self, a: &[u8], b: &[u8]) -> Result<Ordering> {
        SpatialKeyComparator::compare(self, a, b)
    }
}

/// Compares two serialized keys along the Z-order curve defined by `sf`.
///
/// Bounding boxes are validated; use [`SpatialKeyComparator`] to opt out.
///
/// # Errors
///
/// See [`SpatialKeyComparator::morton_code`].
pub fn compare(a: &[u8], b: &[u8], sf: &ScaleFactor) -> Result<Ordering> {
    SpatialKeyComparator::new(sf).compare(a, b)
}

/// Sorts serialized keys in Z-order with box validation on.
///
/// See [`SpatialKeyComparator::sort_keys`].
///
/// # Errors
///
/// Same as [`SpatialKeyComparator::sort_keys`].
pub fn sort_keys<K: AsRef<[u8]>>(keys: &mut [K], sf: &ScaleFactor) -> Result<()> {
    SpatialKeyComparator::new(sf).sort_keys(keys)
}

/// Parallel variant of [`sort_keys`] running on the rayon global pool.
///
/// # Errors
///
/// Same as [`SpatialKeyComparator::par_sort_keys`].
#[cfg(feature = "parallel")]
pub fn par_sort_keys<K>(keys: &mut [K], sf: &ScaleFactor) -> Result<()>
where
    K: AsRef<[u8]> + Sync,
{
    SpatialKeyComparator::new(sf).par_sort_keys(keys)
}

/// Rearranges `items` so position `i` holds the element previously at `order[i]`.
fn apply_permutation<K>(items: &mut [K], mut order: Vec<usize>) {
    for start in 0..items.len() {
        let mut current = start;
        loop {
            let next = order[current];
            order[current] = current;
            if next == start || next == current {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}

fn reject(err: Error) -> Error {
    if err.is_precondition_violation() {
        tracing::warn!(code = err.code(), error = %err, "Spatial key rejected");
    }
    err
}
