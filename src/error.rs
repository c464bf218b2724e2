//! Error types for frame2d operations.

use thiserror::Error;

/// Errors that can occur while building or inverting a transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The matrix has a zero (or non-finite) determinant and cannot be inverted.
    #[error("singular matrix: determinant is zero or not finite")]
    Singular,

    /// The inverse's homogeneous scale coefficient is zero, so it cannot be normalized.
    #[error("inverse has a zero homogeneous scale and cannot be normalized")]
    ZeroHomogeneousScale,

    /// The `xk`/`yk` slots of the matrix are not zero, so it is not an affine map.
    #[error("not an affine matrix: xk and yk must be zero")]
    NonAffine,

    /// A line direction (or a point cloud's spread) has zero length.
    #[error("degenerate input: direction has zero length")]
    DegenerateDirection,

    /// An integer rotation flag outside the three supported codes.
    #[error("unrecognized rotation flag {0}")]
    UnrecognizedRotation(i32),

    /// Not enough points for the requested operation.
    #[error("need at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points required.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },
}
