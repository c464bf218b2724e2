//! 2D affine transform with a cached inverse.

use super::Rotation;
use crate::error::TransformError;
use crate::fit::LineFit;
use crate::matrix::Matrix3;
use crate::primitives::{Point2, Vec2};
use log::{debug, trace};
use num_traits::Float;
use std::fmt;

/// A 2D affine transform between a local frame and its ambient ("world") frame.
///
/// The forward matrix maps local coordinates to world coordinates; its
/// inverse is computed once at construction and cached, so both mapping
/// directions are a handful of multiply-adds.
///
/// Typical frames:
/// - world = image pixels, local = a rotated camera frame
/// - world = image pixels, local = `(rejection, projection)` relative to a
///   fitted line (see [`Transform2d::from_line_fit`])
///
/// Transforms are immutable values. Every composition method returns a new
/// transform.
///
/// # Example
///
/// ```
/// use frame2d::{Point2, Transform2d};
///
/// let t: Transform2d<f64> = Transform2d::identity()
///     .rotate_ccw_deg(90.0)
///     .translate(10.0, 0.0);
///
/// let world = t.local_to_world(Point2::new(1.0, 0.0));
/// assert!((world.x - 10.0).abs() < 1e-12);
/// assert!((world.y - 1.0).abs() < 1e-12);
///
/// let local = t.world_to_local(world);
/// assert!((local.x - 1.0).abs() < 1e-12);
/// assert!(local.y.abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2d<F> {
    forward: Matrix3<F>,
    inverse: Matrix3<F>,
}

impl<F: Float> Transform2d<F> {
    /// The identity transform: local and world frames coincide.
    pub fn identity() -> Self {
        Self {
            forward: Matrix3::identity(),
            inverse: Matrix3::identity(),
        }
    }

    /// Creates a transform whose forward matrix is `forward`, verbatim.
    ///
    /// `xk` and `yk` must be zero, so the determinant is
    /// `tk * (xi*yj - xj*yi)` and stays non-zero under rotation, mirroring and
    /// translation. `tk` is not validated beyond being invertible; it should
    /// be `1` for the mapping helpers to have their affine meaning.
    ///
    /// # Errors
    ///
    /// [`TransformError::NonAffine`] if `xk` or `yk` is non-zero, otherwise
    /// any error of [`Matrix3::try_inverse`].
    pub fn from_matrix(forward: Matrix3<F>) -> Result<Self, TransformError> {
        if forward[2] != F::zero() || forward[5] != F::zero() {
            debug!("rejecting matrix with non-zero xk/yk");
            return Err(TransformError::NonAffine);
        }
        let inverse = forward.try_inverse()?;
        Ok(Self { forward, inverse })
    }

    /// Creates a transform from nine column-major coefficients
    /// `[xi, xj, xk, yi, yj, yk, ti, tj, tk]`.
    pub fn from_coefficients(coefficients: [F; 9]) -> Result<Self, TransformError> {
        Self::from_matrix(Matrix3::new(coefficients))
    }

    /// Creates a transform from its x axis `(xi, xj)`, y axis `(yi, yj)` and
    /// translation `(ti, tj)`.
    pub fn from_affine(xi: F, xj: F, yi: F, yj: F, ti: F, tj: F) -> Result<Self, TransformError> {
        Self::from_matrix(Matrix3::from_affine(xi, xj, yi, yj, ti, tj))
    }

    /// Creates the image-to-fitted transform for a line fit.
    ///
    /// The local y axis runs along the fitted line and the local x axis is the
    /// line direction rotated 90 degrees clockwise, `(vy, -vx)`. The local
    /// origin is the orthogonal projection of `reference` onto the line. A
    /// world point therefore maps to `(rejection, projection)`: its signed
    /// perpendicular offset from the line and its position along the line
    /// measured from the projected reference.
    ///
    /// The line direction is normalized first, so rejection and projection
    /// are in world units.
    ///
    /// # Errors
    ///
    /// [`TransformError::DegenerateDirection`] if the fit's direction has zero
    /// length.
    ///
    /// # Example
    ///
    /// ```
    /// use frame2d::{LineFit, Point2, Transform2d};
    ///
    /// // Line y = 0 running along +x
    /// let fit: LineFit<f64> = LineFit::new(1.0, 0.0, 0.0, 0.0);
    /// let t = Transform2d::from_line_fit(&fit, Point2::new(5.0, 3.0)).unwrap();
    ///
    /// assert_eq!(t.origin(), Point2::new(5.0, 0.0));
    /// let local = t.world_to_local(Point2::new(8.0, 3.0));
    /// assert_eq!((local.x, local.y), (-3.0, 3.0));
    /// ```
    pub fn from_line_fit(fit: &LineFit<F>, reference: Point2<F>) -> Result<Self, TransformError> {
        let direction = fit.direction().normalize().ok_or_else(|| {
            debug!("line fit direction has zero length");
            TransformError::DegenerateDirection
        })?;

        let candidate = Self::from_matrix(Matrix3::from_axes(
            direction.perpendicular_cw(),
            direction,
            fit.point().to_vec(),
        ))?;

        // Keep only the along-line component of the reference point
        let mut projected = candidate.world_to_local(reference);
        trace!(
            "reference point has rejection {} and projection {} from the fit point",
            projected.x.to_f64().unwrap_or(f64::NAN),
            projected.y.to_f64().unwrap_or(f64::NAN)
        );
        projected.x = F::zero();

        let origin = candidate.local_to_world(projected);
        trace!(
            "line-fit origin at ({}, {})",
            origin.x.to_f64().unwrap_or(f64::NAN),
            origin.y.to_f64().unwrap_or(f64::NAN)
        );

        Self::from_matrix(candidate.forward.with_translation(origin.to_vec()))
    }

    /// A pure quarter-turn rotation with no translation.
    pub fn from_rotation(rotation: Rotation) -> Self {
        Self::from_rotation_translation(rotation, F::zero(), F::zero())
    }

    /// A quarter-turn rotation followed by a translation of `(tx, ty)`.
    pub fn from_rotation_translation(rotation: Rotation, tx: F, ty: F) -> Self {
        let (x_axis, y_axis) = rotation.axes();
        Self::with_forward(Matrix3::from_axes(x_axis, y_axis, Vec2::new(tx, ty)))
    }

    /// Builds a transform from a forward matrix known to be invertible.
    ///
    /// Callers only pass quarter-turn rotations, or matrices derived from a
    /// valid transform by rotating, negating or translating columns. With
    /// `xk = yk = 0` (checked in [`Transform2d::from_matrix`]) those keep
    /// `xi*yj - xj*yi` non-zero and leave `tk` alone, so the determinant
    /// stays non-zero.
    fn with_forward(forward: Matrix3<F>) -> Self {
        Self {
            forward,
            inverse: forward.inverse(),
        }
    }

    /// Rotates both basis axes counter-clockwise by `angle` radians.
    ///
    /// The translation is left unchanged.
    pub fn rotate_ccw_rad(&self, angle: F) -> Self {
        Self::with_forward(
            self.forward
                .with_x_axis(self.forward.x_axis().rotated(angle))
                .with_y_axis(self.forward.y_axis().rotated(angle)),
        )
    }

    /// Rotates both basis axes counter-clockwise by `angle` degrees.
    pub fn rotate_ccw_deg(&self, angle: F) -> Self {
        self.rotate_ccw_rad(angle.to_radians())
    }

    /// Reflects the y axis through the x axis (negates the y axis column).
    pub fn mirror_about_x(&self) -> Self {
        Self::with_forward(self.forward.with_y_axis(-self.forward.y_axis()))
    }

    /// Reflects the x axis through the y axis (negates the x axis column).
    pub fn mirror_about_y(&self) -> Self {
        Self::with_forward(self.forward.with_x_axis(-self.forward.x_axis()))
    }

    /// Replaces the translation with `(tx, ty)`, keeping the axes.
    pub fn translate(&self, tx: F, ty: F) -> Self {
        Self::with_forward(self.forward.with_translation(Vec2::new(tx, ty)))
    }

    /// Maps a point from the world frame into this transform's local frame.
    #[inline]
    pub fn world_to_local(&self, p: Point2<F>) -> Point2<F> {
        self.inverse.apply(p)
    }

    /// Maps a point from this transform's local frame into the world frame.
    #[inline]
    pub fn local_to_world(&self, p: Point2<F>) -> Point2<F> {
        self.forward.apply(p)
    }

    /// Maps several world points into the local frame.
    pub fn world_to_local_all(&self, points: &[Point2<F>]) -> Vec<Point2<F>> {
        points.iter().map(|p| self.world_to_local(*p)).collect()
    }

    /// Maps several local points into the world frame.
    pub fn local_to_world_all(&self, points: &[Point2<F>]) -> Vec<Point2<F>> {
        points.iter().map(|p| self.local_to_world(*p)).collect()
    }

    /// The z component of `x_axis × y_axis`: `xi*yj - xj*yi`.
    ///
    /// This is the signed area scale of the map. Positive means the local
    /// frame has the same handedness as the world frame; negative means it is
    /// mirrored.
    #[inline]
    pub fn z_mag(&self) -> F {
        self.forward.x_axis().cross(self.forward.y_axis())
    }

    /// The local-to-world matrix.
    #[inline]
    pub fn forward(&self) -> &Matrix3<F> {
        &self.forward
    }

    /// The world-to-local matrix.
    #[inline]
    pub fn inverse(&self) -> &Matrix3<F> {
        &self.inverse
    }

    /// World position of the local origin.
    #[inline]
    pub fn origin(&self) -> Point2<F> {
        self.local_to_world(Point2::origin())
    }

    /// The local x axis expressed in world coordinates.
    #[inline]
    pub fn x_axis(&self) -> Vec2<F> {
        self.forward.x_axis()
    }

    /// The local y axis expressed in world coordinates.
    #[inline]
    pub fn y_axis(&self) -> Vec2<F> {
        self.forward.y_axis()
    }

    /// Returns true if both matrices match `other`'s within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: F) -> bool {
        self.forward.approx_eq(&other.forward, epsilon)
            && self.inverse.approx_eq(&other.inverse, epsilon)
    }
}

impl<F: Float> Default for Transform2d<F> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Debug dump of both matrices. Not a stable format.
impl<F: Float + fmt::Display> fmt::Display for Transform2d<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "forward")?;
        writeln!(f, "{}", self.forward)?;
        writeln!(f, "inverse")?;
        write!(f, "{}", self.inverse)
    }
}
