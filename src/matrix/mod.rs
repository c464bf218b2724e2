//! Fixed-size 3x3 matrix algebra backing the affine transforms.

mod mat3;

pub use mat3::Matrix3;
