//! Projection of center points onto the fixed integer grid.

use crate::alloc;
use crate::center::CenterPoint;
use crate::error::{Error, Result};
use crate::scale::ScaleFactor;

/// Grid coordinates of a center point, one `u32` per dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPoint(Vec<u32>);

impl GridPoint {
    /// Wraps precomputed grid coordinates.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self(values)
    }

    /// Number of dimensions.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Grid coordinates in dimension order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

/// Maps `point` onto the grid: `(point_i - offset_i) * scale_i`, truncated.
///
/// Truncation keeps the mapping monotonic, which is all the curve ordering
/// needs. Values below 0 clamp to 0, values above `u32::MAX` clamp to
/// `u32::MAX` and NaN maps to 0, so points outside the reference box sort
/// at the grid edges instead of wrapping.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] if `point` and `sf` disagree on dimension.
/// - [`Error::AllocationFailure`] if the output buffer cannot be reserved.
pub fn project(point: &CenterPoint, sf: &ScaleFactor) -> Result<GridPoint> {
    let dim = usize::from(sf.dim());
    if point.dim() != dim {
        return Err(Error::DimensionMismatch {
            expected: dim,
            actual: point.dim(),
        });
    }

    let mut values = alloc::try_with_capacity("grid point", dim)?;
    values.extend(
        point
            .as_slice()
            .iter()
            .zip(sf.pairs())
            .map(|(&p, (offset, scale))| ((p - offset) * scale) as u32),
    );
    Ok(GridPoint(values))
}
