//! Column-major 3x3 homogeneous matrix for 2D affine maps.

use crate::error::TransformError;
use crate::primitives::{Point2, Vec2};
use log::debug;
use num_traits::Float;
use std::fmt;
use std::ops::{Index, Mul};

/// A 3x3 homogeneous matrix stored as nine coefficients in column-major order.
///
/// ```text
/// [ xi, xj, xk,    x axis (xk is 0 for affine use)
///   yi, yj, yk,    y axis (yk is 0 for affine use)
///   ti, tj, tk ]   translation (tk is 1 for affine use)
/// ```
///
/// Only `xi, xj, yi, yj, ti, tj` carry meaning for an affine map. The third
/// row exists so the determinant/adjoint/inverse helpers can treat the matrix
/// as an ordinary 3x3.
///
/// # Example
///
/// ```
/// use frame2d::{Matrix3, Point2};
///
/// // Swap axes and shift by (10, 20)
/// let m: Matrix3<f64> = Matrix3::from_affine(0.0, 1.0, 1.0, 0.0, 10.0, 20.0);
/// let p = m.apply(Point2::new(1.0, 2.0));
/// assert_eq!(p, Point2::new(12.0, 21.0));
/// assert_eq!(m.determinant(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3<F> {
    m: [F; 9],
}

impl<F: Float> Matrix3<F> {
    /// Wraps nine column-major coefficients verbatim.
    #[inline]
    pub fn new(coefficients: [F; 9]) -> Self {
        Self { m: coefficients }
    }

    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        let (o, z) = (F::one(), F::zero());
        Self::new([o, z, z, z, o, z, z, z, o])
    }

    /// Creates an affine matrix from its six meaningful coefficients,
    /// filling `xk = yk = 0` and `tk = 1`.
    #[inline]
    pub fn from_affine(xi: F, xj: F, yi: F, yj: F, ti: F, tj: F) -> Self {
        let (o, z) = (F::one(), F::zero());
        Self::new([xi, xj, z, yi, yj, z, ti, tj, o])
    }

    /// Creates an affine matrix from basis axes and a translation.
    #[inline]
    pub fn from_axes(x_axis: Vec2<F>, y_axis: Vec2<F>, translation: Vec2<F>) -> Self {
        Self::from_affine(
            x_axis.x,
            x_axis.y,
            y_axis.x,
            y_axis.y,
            translation.x,
            translation.y,
        )
    }

    /// Returns the raw coefficients.
    #[inline]
    pub fn coefficients(&self) -> [F; 9] {
        self.m
    }

    /// Borrows the raw coefficients.
    #[inline]
    pub fn as_array(&self) -> &[F; 9] {
        &self.m
    }

    /// The first column's `(xi, xj)`.
    #[inline]
    pub fn x_axis(&self) -> Vec2<F> {
        Vec2::new(self.m[0], self.m[1])
    }

    /// The second column's `(yi, yj)`.
    #[inline]
    pub fn y_axis(&self) -> Vec2<F> {
        Vec2::new(self.m[3], self.m[4])
    }

    /// The third column's `(ti, tj)`.
    #[inline]
    pub fn translation(&self) -> Vec2<F> {
        Vec2::new(self.m[6], self.m[7])
    }

    /// Returns a copy with the x axis column replaced (`xk` untouched).
    #[inline]
    pub fn with_x_axis(mut self, axis: Vec2<F>) -> Self {
        self.m[0] = axis.x;
        self.m[1] = axis.y;
        self
    }

    /// Returns a copy with the y axis column replaced (`yk` untouched).
    #[inline]
    pub fn with_y_axis(mut self, axis: Vec2<F>) -> Self {
        self.m[3] = axis.x;
        self.m[4] = axis.y;
        self
    }

    /// Returns a copy with the translation column replaced (`tk` untouched).
    #[inline]
    pub fn with_translation(mut self, translation: Vec2<F>) -> Self {
        self.m[6] = translation.x;
        self.m[7] = translation.y;
        self
    }

    /// Determinant by the rule of Sarrus.
    ///
    /// The determinant is invariant under transposition, so the expansion
    /// reads the buffer directly regardless of its column-major layout.
    pub fn determinant(&self) -> F {
        let m = &self.m;
        m[0] * m[4] * m[8] + m[1] * m[5] * m[6] + m[2] * m[3] * m[7]
            - m[2] * m[4] * m[6]
            - m[1] * m[3] * m[8]
            - m[0] * m[5] * m[7]
    }

    /// Adjoint (adjugate): the transpose of the cofactor matrix.
    ///
    /// No division is involved, so this is defined for every input.
    pub fn adjoint(&self) -> Self {
        let m = &self.m;
        Self::new([
            m[4] * m[8] - m[5] * m[7],
            m[2] * m[7] - m[1] * m[8],
            m[1] * m[5] - m[2] * m[4],
            m[5] * m[6] - m[3] * m[8],
            m[0] * m[8] - m[2] * m[6],
            m[2] * m[3] - m[0] * m[5],
            m[3] * m[7] - m[4] * m[6],
            m[1] * m[6] - m[0] * m[7],
            m[0] * m[4] - m[1] * m[3],
        ])
    }

    /// Inverse as `adjoint / determinant`, re-normalized so `tk == 1`.
    ///
    /// This is unchecked: a singular matrix yields `inf`/`NaN` coefficients.
    /// Use [`Matrix3::try_inverse`] when the input is not known to be
    /// invertible.
    pub fn inverse(&self) -> Self {
        let inv_det = F::one() / self.determinant();
        let scaled = self.adjoint() * inv_det;
        let w = scaled.m[8];
        Self::new(scaled.m.map(|c| c / w))
    }

    /// Checked inverse.
    ///
    /// Fails with [`TransformError::Singular`] when the determinant is zero or
    /// not finite, and with [`TransformError::ZeroHomogeneousScale`] when the
    /// result cannot be normalized to `tk == 1`.
    pub fn try_inverse(&self) -> Result<Self, TransformError> {
        let det = self.determinant();
        if det == F::zero() || !det.is_finite() {
            debug!(
                "rejecting singular matrix (determinant {})",
                det.to_f64().unwrap_or(f64::NAN)
            );
            return Err(TransformError::Singular);
        }

        let scaled = self.adjoint() * (F::one() / det);
        let w = scaled.m[8];
        if w == F::zero() || !w.is_finite() {
            debug!("rejecting matrix whose inverse has no homogeneous scale");
            return Err(TransformError::ZeroHomogeneousScale);
        }

        Ok(Self::new(scaled.m.map(|c| c / w)))
    }

    /// Maps a point through this matrix with an implicit homogeneous `w = 1`.
    ///
    /// The third row is never read.
    #[inline]
    pub fn apply(&self, p: Point2<F>) -> Point2<F> {
        let m = &self.m;
        Point2::new(
            m[0] * p.x + m[3] * p.y + m[6],
            m[1] * p.x + m[4] * p.y + m[7],
        )
    }

    /// Returns true if every coefficient is within `epsilon` of `other`'s.
    pub fn approx_eq(&self, other: &Self, epsilon: F) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }
}

impl<F: Float> Default for Matrix3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F> Index<usize> for Matrix3<F> {
    type Output = F;

    #[inline]
    fn index(&self, index: usize) -> &F {
        &self.m[index]
    }
}

impl<F: Float> Mul for Matrix3<F> {
    type Output = Self;

    /// Matrix product `self * rhs` in the column-major layout.
    fn mul(self, rhs: Self) -> Self {
        let mut out = [F::zero(); 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = (0..3).fold(F::zero(), |acc, k| {
                    acc + self.m[k * 3 + row] * rhs.m[col * 3 + k]
                });
            }
        }
        Self::new(out)
    }
}

impl<F: Float> Mul<F> for Matrix3<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.m.map(|c| c * scalar))
    }
}

impl<F: Float> Mul<Point2<F>> for Matrix3<F> {
    type Output = Point2<F>;

    #[inline]
    fn mul(self, rhs: Point2<F>) -> Point2<F> {
        self.apply(rhs)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Matrix3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.m;
        writeln!(f, "[")?;
        writeln!(f, "  x_axis: [{}, {}, {}],", m[0], m[1], m[2])?;
        writeln!(f, "  y_axis: [{}, {}, {}],", m[3], m[4], m[5])?;
        writeln!(f, "  t_axis: [{}, {}, {}],", m[6], m[7], m[8])?;
        write!(f, "]")
    }
}
