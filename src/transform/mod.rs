//! Affine transforms between local and world frames.

mod rotation;
mod transform2d;

pub use rotation::Rotation;
pub use transform2d::Transform2d;
