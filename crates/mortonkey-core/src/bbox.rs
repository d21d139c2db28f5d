//! Multidimensional bounding boxes.
//!
//! A [`BoundingBox`] stores `dim` `(min, max)` pairs flattened as
//! `[min_0, max_0, min_1, max_1, ...]`, the same order the serialized key
//! layout uses.

use crate::alloc;
use crate::error::{Error, Result};

/// Axis-aligned bounding box with `dim` dimensions of `f64` bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    coords: Vec<f64>,
}

impl BoundingBox {
    /// Creates a bounding box from flattened `(min, max)` pairs.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyDimension`] if `coords` is empty.
    /// - [`Error::MalformedKey`] if the coordinate count is odd or the
    ///   dimension count does not fit in a `u16`.
    pub fn new(coords: Vec<f64>) -> Result<Self> {
        if coords.is_empty() {
            return Err(Error::EmptyDimension);
        }
        if coords.len() % 2 != 0 {
            return Err(Error::MalformedKey(format!(
                "bounding box needs (min, max) pairs, got {} coordinates",
                coords.len()
            )));
        }
        if coords.len() / 2 > usize::from(u16::MAX) {
            return Err(Error::MalformedKey(format!(
                "bounding box has {} dimensions, at most {} are supported",
                coords.len() / 2,
                u16::MAX
            )));
        }
        Ok(Self { coords })
    }

    /// Creates a bounding box from one `(min, max)` range per dimension.
    ///
    /// # Errors
    ///
    /// Same as [`BoundingBox::new`], plus [`Error::AllocationFailure`].
    pub fn from_ranges(ranges: &[(f64, f64)]) -> Result<Self> {
        let mut coords = alloc::try_with_capacity("bounding box", ranges.len() * 2)?;
        for &(min, max) in ranges {
            coords.push(min);
            coords.push(max);
        }
        Self::new(coords)
    }

    /// Number of dimensions.
    #[must_use]
    #[inline]
    pub fn dim(&self) -> u16 {
        // Bounded by the check in `new`.
        (self.coords.len() / 2) as u16
    }

    /// Lower bound on dimension `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim`.
    #[must_use]
    #[inline]
    pub fn min(&self, i: usize) -> f64 {
        self.coords[i * 2]
    }

    /// Upper bound on dimension `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim`.
    #[must_use]
    #[inline]
    pub fn max(&self, i: usize) -> f64 {
        self.coords[i * 2 + 1]
    }

    /// Iterates over the `(min, max)` pair of every dimension.
    pub fn ranges(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.coords.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Flattened `[min_0, max_0, ...]` coordinates.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Checks `min_i <= max_i` on every dimension.
    ///
    /// NaN bounds fail the check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoundingBox`] naming the first bad dimension.
    pub fn validate(&self) -> Result<()> {
        for (dimension, (min, max)) in self.ranges().enumerate() {
            if min.is_nan() || max.is_nan() || min > max {
                return Err(Error::InvalidBoundingBox {
                    dimension,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Smallest box covering both `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the boxes differ in dimension.
    pub fn union(&self, other: &Self) -> Result<Self> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch {
                expected: usize::from(self.dim()),
                actual: usize::from(other.dim()),
            });
        }
        let mut coords = alloc::try_with_capacity("bounding box", self.coords.len())?;
        for ((a_min, a_max), (b_min, b_max)) in self.ranges().zip(other.ranges()) {
            coords.push(a_min.min(b_min));
            coords.push(a_max.max(b_max));
        }
        Ok(Self { coords })
    }

    /// Smallest box covering every box in `boxes`.
    ///
    /// This is how an index derives the global reference box it hands to
    /// [`ScaleFactor::build`](crate::ScaleFactor::build).
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyDimension`] if `boxes` yields nothing.
    /// - [`Error::DimensionMismatch`] if the boxes differ in dimension.
    pub fn enclosing<'a, I>(boxes: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a BoundingBox>,
    {
        let mut iter = boxes.into_iter();
        let first = iter.next().ok_or(Error::EmptyDimension)?.clone();
        iter.try_fold(first, |acc, b| acc.union(b))
    }
}
