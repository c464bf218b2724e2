//! Discrete quarter-turn rotation flags.

use crate::error::TransformError;
use crate::primitives::Vec2;
use num_traits::Float;

/// A rotation by a multiple of 90 degrees, as used when an image or camera
/// is mounted in a rotated orientation.
///
/// The integer codes accepted by [`Rotation::try_from`] follow the usual
/// image-library numbering: `0` = 90° clockwise, `1` = 180°,
/// `2` = 90° counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise90,
    Rotate180,
    CounterClockwise90,
}

impl Rotation {
    /// All supported rotations.
    pub const ALL: [Rotation; 3] = [
        Rotation::Clockwise90,
        Rotation::Rotate180,
        Rotation::CounterClockwise90,
    ];

    /// The integer flag code for this rotation.
    pub fn code(self) -> i32 {
        match self {
            Rotation::Clockwise90 => 0,
            Rotation::Rotate180 => 1,
            Rotation::CounterClockwise90 => 2,
        }
    }

    /// Basis axes `(x_axis, y_axis)` of the rotated frame.
    ///
    /// Fixed coefficient patterns, no trigonometry.
    pub(crate) fn axes<F: Float>(self) -> (Vec2<F>, Vec2<F>) {
        let (o, z) = (F::one(), F::zero());
        match self {
            Rotation::Clockwise90 => (Vec2::new(z, -o), Vec2::new(o, z)),
            Rotation::Rotate180 => (Vec2::new(-o, z), Vec2::new(z, -o)),
            Rotation::CounterClockwise90 => (Vec2::new(z, o), Vec2::new(-o, z)),
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = TransformError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Rotation::Clockwise90),
            1 => Ok(Rotation::Rotate180),
            2 => Ok(Rotation::CounterClockwise90),
            other => Err(TransformError::UnrecognizedRotation(other)),
        }
    }
}
