//! Error types for `mortonkey`.
//!
//! A single error type covers every fallible step of the key comparison
//! pipeline. Allocation failures are reported, never aborted on, and
//! contract violations (mismatched dimensions, malformed keys, invalid boxes)
//! are surfaced so the enclosing sort or merge can stop and report upward.

use thiserror::Error;

/// Result type alias for `mortonkey` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building scale factors or comparing keys.
///
/// Error codes follow the pattern `MKEY-XXX` for easy debugging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A buffer could not be reserved (MKEY-001).
    #[error("[MKEY-001] Allocation failure: could not reserve {bytes} bytes for {what}")]
    AllocationFailure {
        /// Which buffer was being allocated.
        what: &'static str,
        /// Requested size in bytes.
        bytes: usize,
    },

    /// Dimension mismatch (MKEY-002).
    #[error("[MKEY-002] Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Too many dimensions to interleave (MKEY-003).
    #[error("[MKEY-003] Cannot interleave {dim} dimensions (must be below {max})")]
    DimensionOverflow {
        /// Requested dimension count.
        dim: usize,
        /// Exclusive upper bound.
        max: usize,
    },

    /// Serialized key does not match the `[u16 dim][f64 x 2*dim]` layout (MKEY-004).
    #[error("[MKEY-004] Malformed key: {0}")]
    MalformedKey(String),

    /// Bounding box with `min > max` or a NaN coordinate (MKEY-005).
    #[error("[MKEY-005] Invalid bounding box on dimension {dimension}: min {min} > max {max}")]
    InvalidBoundingBox {
        /// Offending dimension index.
        dimension: usize,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Zero-dimensional box or scale factor (MKEY-006).
    #[error("[MKEY-006] Bounding box must have at least one dimension")]
    EmptyDimension,

    /// Configuration error (MKEY-007).
    #[error("[MKEY-007] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "MKEY-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AllocationFailure { .. } => "MKEY-001",
            Self::DimensionMismatch { .. } => "MKEY-002",
            Self::DimensionOverflow { .. } => "MKEY-003",
            Self::MalformedKey(_) => "MKEY-004",
            Self::InvalidBoundingBox { .. } => "MKEY-005",
            Self::EmptyDimension => "MKEY-006",
            Self::Config(_) => "MKEY-007",
        }
    }

    /// Returns true if this error is a contract violation by the caller.
    ///
    /// These signal a mismatch between the index's declared dimensionality
    /// and the keys it stores; retrying the same input fails the same way.
    #[must_use]
    pub const fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. }
                | Self::DimensionOverflow { .. }
                | Self::MalformedKey(_)
                | Self::InvalidBoundingBox { .. }
                | Self::EmptyDimension
        )
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
