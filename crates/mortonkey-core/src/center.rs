//! Bounding box center points.

use crate::alloc;
use crate::bbox::BoundingBox;
use crate::error::Result;

/// Center of a bounding box, one `f64` per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterPoint(Vec<f64>);

impl CenterPoint {
    /// Wraps precomputed coordinates.
    #[must_use]
    pub fn new(coords: Vec<f64>) -> Self {
        Self(coords)
    }

    /// Number of dimensions.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Coordinates in dimension order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Computes `min_i + (max_i - min_i) / 2` for every dimension.
///
/// The box is not validated: an inverted box yields a center outside its
/// nominal range, which still orders deterministically.
///
/// # Errors
///
/// Returns [`Error::AllocationFailure`](crate::Error::AllocationFailure) if
/// the output buffer cannot be reserved.
pub fn center(bbox: &BoundingBox) -> Result<CenterPoint> {
    let mut coords = alloc::try_with_capacity("center point", usize::from(bbox.dim()))?;
    coords.extend(bbox.ranges().map(|(min, max)| min + (max - min) / 2.0));
    Ok(CenterPoint(coords))
}
