//! Least-squares line fitting.

use crate::error::TransformError;
use crate::primitives::{Point2, Vec2};
use log::debug;
use num_traits::Float;

/// A fitted line: a direction vector plus a point on the line.
///
/// This is the `(vx, vy, x0, y0)` descriptor produced by [`fit_line`] and by
/// the usual image-library line fitters. The direction is expected to be
/// non-zero; [`fit_line`] always returns it with unit length.
///
/// # Example
///
/// ```
/// use frame2d::{LineFit, Point2};
///
/// // Vertical line x = 2
/// let fit: LineFit<f64> = LineFit::new(0.0, 1.0, 2.0, 0.0);
/// assert_eq!(fit.signed_distance(Point2::new(5.0, 7.0)), 3.0);
/// assert_eq!(fit.closest_point(Point2::new(5.0, 7.0)), Point2::new(2.0, 7.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<F> {
    direction: Vec2<F>,
    point: Point2<F>,
}

impl<F: Float> LineFit<F> {
    /// Creates a line fit from direction `(vx, vy)` and point `(x0, y0)`.
    #[inline]
    pub fn new(vx: F, vy: F, x0: F, y0: F) -> Self {
        Self {
            direction: Vec2::new(vx, vy),
            point: Point2::new(x0, y0),
        }
    }

    /// Creates a line fit from a `[vx, vy, x0, y0]` array.
    #[inline]
    pub fn from_array([vx, vy, x0, y0]: [F; 4]) -> Self {
        Self::new(vx, vy, x0, y0)
    }

    /// Creates a line fit from a point on the line and its direction.
    #[inline]
    pub fn from_point_direction(point: Point2<F>, direction: Vec2<F>) -> Self {
        Self { direction, point }
    }

    /// Returns `[vx, vy, x0, y0]`.
    #[inline]
    pub fn to_array(&self) -> [F; 4] {
        [
            self.direction.x,
            self.direction.y,
            self.point.x,
            self.point.y,
        ]
    }

    /// Returns the direction vector `(vx, vy)`.
    #[inline]
    pub fn direction(&self) -> Vec2<F> {
        self.direction
    }

    /// Returns the point `(x0, y0)` on the line.
    #[inline]
    pub fn point(&self) -> Point2<F> {
        self.point
    }

    /// The direction rotated 90 degrees clockwise, `(vy, -vx)`.
    ///
    /// Rejection coordinates are measured along this axis.
    #[inline]
    pub fn normal(&self) -> Vec2<F> {
        self.direction.perpendicular_cw()
    }

    /// Signed perpendicular distance from `p` to the line.
    ///
    /// Positive on the side [`LineFit::normal`] points to, which matches the
    /// sign of the rejection coordinate of a line-fit transform.
    pub fn signed_distance(&self, p: Point2<F>) -> F {
        (p - self.point).dot(self.normal()) / self.direction.magnitude()
    }

    /// Unsigned perpendicular distance from `p` to the line.
    #[inline]
    pub fn distance(&self, p: Point2<F>) -> F {
        self.signed_distance(p).abs()
    }

    /// Orthogonal projection of `p` onto the line.
    pub fn closest_point(&self, p: Point2<F>) -> Point2<F> {
        let d = self.direction;
        let t = (p - self.point).dot(d) / d.dot(d);
        self.point + d * t
    }
}

/// Fits a line to a set of points by orthogonal least squares.
///
/// Minimizes the sum of squared perpendicular distances (the L2 fit). The
/// returned line passes through the centroid; its direction is the principal
/// axis of the scatter matrix, unit length, with a non-negative x component.
///
/// # Errors
///
/// - [`TransformError::InsufficientPoints`] for fewer than 2 points.
/// - [`TransformError::DegenerateDirection`] if all points coincide.
///
/// # Example
///
/// ```
/// use frame2d::{fit_line, Point2};
///
/// let points = vec![
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 3.0),
///     Point2::new(2.0, 5.0),
/// ];
/// let fit = fit_line(&points).unwrap();
/// assert!(fit.distance(Point2::new(3.0, 7.0)) < 1e-9);
/// ```
pub fn fit_line<F: Float>(points: &[Point2<F>]) -> Result<LineFit<F>, TransformError> {
    let n = points.len();
    if n < 2 {
        return Err(TransformError::InsufficientPoints {
            required: 2,
            actual: n,
        });
    }

    let count = points.iter().fold(F::zero(), |acc, _| acc + F::one());
    let sum = points
        .iter()
        .fold(Vec2::zero(), |acc, p| acc + p.to_vec());
    let centroid = Point2::new(sum.x / count, sum.y / count);

    let (mut sxx, mut syy, mut sxy) = (F::zero(), F::zero(), F::zero());
    for p in points {
        let d = *p - centroid;
        sxx = sxx + d.x * d.x;
        syy = syy + d.y * d.y;
        sxy = sxy + d.x * d.y;
    }

    // Also catches NaN input
    if !(sxx + syy > F::zero()) {
        debug!("cannot fit a line to {} coincident points", n);
        return Err(TransformError::DegenerateDirection);
    }

    let two = F::one() + F::one();
    let theta = (two * sxy).atan2(sxx - syy) / two;
    let (sin, cos) = theta.sin_cos();

    Ok(LineFit::from_point_direction(centroid, Vec2::new(cos, sin)))
}
