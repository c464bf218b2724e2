//! frame2d - 2D affine coordinate frames
//!
//! Maps points between an ambient "world" frame (usually image pixels) and
//! local frames built on top of it: rotated camera frames, and the
//! `(rejection, projection)` frame of a fitted line.
//!
//! ```
//! use frame2d::{fit_line, Point2, Transform2d};
//!
//! let edge = vec![
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.5, 50.0),
//!     Point2::new(11.0, 100.0),
//! ];
//! let fit = fit_line(&edge).unwrap();
//! let frame = Transform2d::from_line_fit(&fit, edge[0]).unwrap();
//!
//! // A point 5 px off the edge, 20 px further along it
//! let local = frame.world_to_local(Point2::new(15.2, 20.0));
//! assert!(local.x > 4.0 && local.x < 5.0);
//! assert!(local.y > 19.0 && local.y < 21.0);
//! ```

pub mod error;
pub mod fit;
pub mod matrix;
pub mod primitives;
pub mod transform;

pub use error::TransformError;
pub use fit::{fit_line, LineFit};
pub use matrix::Matrix3;
pub use primitives::{Point2, Vec2};
pub use transform::{Rotation, Transform2d};
