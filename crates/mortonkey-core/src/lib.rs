//! # `mortonkey` Core
//!
//! Z-order (Morton) comparator for multidimensional bounding-box keys.
//!
//! Spatial keys are reduced to a single byte string whose lexicographic
//! order follows the Z-order curve, so a plain one-dimensional ordered index
//! (a B-tree, a sorted run, a merge) can store and range-scan spatial data.
//!
//! ## Pipeline
//!
//! - **[`ScaleFactor`]**: built once from a global reference box, shared read-only
//! - **[`center()`]**: bounding box to center point
//! - **[`project()`]**: center point to `u32` grid coordinates (truncating)
//! - **[`interleave()`]**: grid coordinates to a big-endian Morton code
//! - **[`compare()`]**: decode two serialized keys, run the pipeline, compare codes
//!
//! ## Quick Start
//!
//! ```rust
//! use mortonkey_core::{encode_key, BoundingBox, ScaleFactor, SpatialKeyComparator};
//! use std::cmp::Ordering;
//!
//! let global = BoundingBox::from_ranges(&[(0.0, 10.0), (0.0, 10.0)])?;
//! let sf = ScaleFactor::build(&global, 2, 15)?;
//! let cmp = SpatialKeyComparator::new(&sf);
//!
//! let a = encode_key(&BoundingBox::from_ranges(&[(0.5, 1.5), (0.5, 1.5)])?)?;
//! let b = encode_key(&BoundingBox::from_ranges(&[(8.5, 9.5), (8.5, 9.5)])?)?;
//! assert_eq!(cmp.compare(&a, &b)?, Ordering::Less);
//! # Ok::<(), mortonkey_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// Grid projection truncates f64 to u32 on purpose; the key codec narrows
// lengths already bounded by u16.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
pub mod bbox;
pub mod center;
#[cfg(test)]
mod center_tests;
pub mod comparator;
pub mod config;
pub mod error;
pub mod grid;
#[cfg(test)]
mod grid_tests;
pub mod key;
pub mod morton;
pub mod scale;

pub use bbox::BoundingBox;
pub use center::{center, CenterPoint};
#[cfg(feature = "parallel")]
pub use comparator::par_sort_keys;
pub use comparator::{compare, sort_keys, KeyComparator, SpatialKeyComparator};
pub use config::{ConfigError, GridConfig, KeyConfig, MortonKeyConfig};
pub use error::{Error, Result};
pub use grid::{project, GridPoint};
pub use key::{decode_key, encode_key, encoded_len};
pub use morton::{interleave, set_bit, MortonCode, MAX_INTERLEAVE_DIM};
pub use scale::{ScaleFactor, DEFAULT_MAX_GRID};
