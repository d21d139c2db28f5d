//! Per-dimension scale factors mapping `f64` coordinates onto an integer grid.
//!
//! A [`ScaleFactor`] is built once per index from a global reference box
//! that bounds every key the index will ever compare. It is immutable after
//! construction, so one instance can be shared by reference (or behind an
//! `Arc`) across any number of concurrent comparisons.

use crate::alloc;
use crate::bbox::BoundingBox;
use crate::config::MortonKeyConfig;
use crate::error::{Error, Result};

/// Conventional grid resolution: the full `u32` range.
pub const DEFAULT_MAX_GRID: u32 = u32::MAX;

/// Immutable `(offset, scale)` pair per dimension.
///
/// For dimension `i` of the reference box, `offset_i = min_i` and
/// `scale_i = max_grid / (max_i - min_i)`, or `0` when the range is zero.
/// A zero scale collapses every point on that axis to grid coordinate 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleFactor {
    offsets: Vec<f64>,
    scales: Vec<f64>,
    dim: u16,
    max_grid: u32,
}

impl ScaleFactor {
    /// Builds a scale factor from the global reference box.
    ///
    /// # Arguments
    ///
    /// * `global` - Box covering every key the index will compare
    /// * `dim` - Declared dimensionality of the index
    /// * `max_grid` - Grid resolution, conventionally [`DEFAULT_MAX_GRID`]
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if `global` does not have `dim` dimensions.
    /// - [`Error::AllocationFailure`] if the offset or scale buffers cannot
    ///   be reserved.
    pub fn build(global: &BoundingBox, dim: u16, max_grid: u32) -> Result<Self> {
        if global.dim() != dim {
            return Err(Error::DimensionMismatch {
                expected: usize::from(dim),
                actual: usize::from(global.dim()),
            });
        }

        let len = usize::from(dim);
        let mut offsets = alloc::try_with_capacity("scale factor offsets", len)?;
        let mut scales = alloc::try_with_capacity("scale factor scales", len)?;
        let mut collapsed = 0usize;

        for (i, (min, max)) in global.ranges().enumerate() {
            let range = max - min;
            offsets.push(min);
            if range == 0.0 {
                tracing::trace!(dimension = i, value = min, "Zero-range dimension collapsed");
                collapsed += 1;
                scales.push(0.0);
            } else {
                scales.push(f64::from(max_grid) / range);
            }
        }

        tracing::debug!(dim, max_grid, collapsed, "Scale factor built");

        Ok(Self {
            offsets,
            scales,
            dim,
            max_grid,
        })
    }

    /// Builds a scale factor using the grid resolution and dimension limit
    /// from `config`.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `config` fails [`MortonKeyConfig::validate`].
    /// - [`Error::DimensionOverflow`] if `global` has more dimensions than
    ///   `config.keys.max_dimensions` allows.
    /// - Everything [`ScaleFactor::build`] returns.
    pub fn from_config(global: &BoundingBox, config: &MortonKeyConfig) -> Result<Self> {
        config.validate()?;
        let dim = global.dim();
        if dim > config.keys.max_dimensions {
            return Err(Error::DimensionOverflow {
                dim: usize::from(dim),
                max: usize::from(config.keys.max_dimensions) + 1,
            });
        }
        Self::build(global, dim, config.grid.max_grid)
    }

    /// Number of dimensions.
    #[must_use]
    #[inline]
    pub fn dim(&self) -> u16 {
        self.dim
    }

    /// Grid resolution this factor was built with.
    #[must_use]
    #[inline]
    pub fn max_grid(&self) -> u32 {
        self.max_grid
    }

    /// Per-dimension offsets (the global box minimums).
    #[must_use]
    #[inline]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Per-dimension multipliers.
    #[must_use]
    #[inline]
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Iterates over the `(offset, scale)` pair of every dimension.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.offsets.iter().copied().zip(self.scales.iter().copied())
    }
}
