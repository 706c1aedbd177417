//! Affine transform with an incrementally maintained inverse.
//!
//! A [`Transform`] owns a forward matrix `M` and its inverse `M⁻¹`. The
//! composing operations ([`translate`](Transform::translate),
//! [`scale`](Transform::scale), [`rotate`](Transform::rotate)) append an
//! elementary matrix `E` on the right of `M` and its closed-form inverse on
//! the left of `M⁻¹`:
//!
//! ```text
//! M   <- M · E
//! M⁻¹ <- E⁻¹ · M⁻¹
//! ```
//!
//! so `M · M⁻¹ = I` holds after every call without a general inversion.
//! Calls compose left to right: in `t.translate(a).scale(b)` the scale acts
//! on the input first and the translation last, as in a scene-graph stack.
//!
//! # Degenerate input
//!
//! Nothing here fails. A zero scale factor puts `Inf` in `M⁻¹`, a zero-length
//! rotation axis normalizes to NaN, and a point whose homogeneous `w` ends up
//! zero divides by zero. Callers that need to reject such transforms use
//! [`Transform::validate`] or build from a matrix with
//! [`Transform::from_matrix`].
//!
//! # Usage
//!
//! ```rust
//! use gm_math::{Normal3, Point3, Transform, Vec3};
//!
//! let mut t = Transform::new();
//! t.scale(Vec3::new(1.0, 4.0, 1.0));
//!
//! assert_eq!(t.apply(Point3::new(1.0, 1.0, 1.0)), Point3::new(1.0, 4.0, 1.0));
//! assert_eq!(t.apply(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 4.0, 0.0));
//! // Normals go through the inverse-transpose and stay on their axis
//! assert_eq!(t.apply(Normal3::new(0.0, 1.0, 0.0)), Normal3::new(0.0, 1.0, 0.0));
//! ```

use std::ops::Mul;

use approx::AbsDiffEq;
use gm_core::{Error, Result};
use tracing::trace;

use crate::{Matrix4f, Normal3, Point3, Vec3, degree_to_radian};

/// Tolerance for the `M · M⁻¹ = I` check in [`Transform::validate`].
const PAIR_TOLERANCE: f32 = 1e-3;

/// A forward matrix and its inverse, kept in lock-step.
///
/// Both fields are private: the only mutators are the composing operations,
/// each of which updates both matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix4f,
    inverse: Matrix4f,
}

/// Values that a [`Transform`] can be applied to.
///
/// Implemented for [`Point3`] (homogeneous `w = 1`), [`Vec3`] (`w = 0`) and
/// [`Normal3`] (inverse-transpose, renormalized).
pub trait Transformable: Sized {
    /// Returns `self` mapped through `transform`.
    fn transformed_by(self, transform: &Transform) -> Self;
}

impl Transform {
    /// The identity transform.
    #[inline]
    pub fn new() -> Self {
        Self {
            matrix: Matrix4f::identity(),
            inverse: Matrix4f::identity(),
        }
    }

    /// Builds a transform from an arbitrary forward matrix.
    ///
    /// The inverse is computed once with [`Matrix4::try_inverse`](crate::Matrix4::try_inverse);
    /// singular matrices are rejected.
    pub fn from_matrix(matrix: Matrix4f) -> Result<Self> {
        let inverse = matrix.try_inverse()?;
        Ok(Self { matrix, inverse })
    }

    /// The forward matrix `M`, used for points and vectors.
    #[inline]
    pub fn matrix(&self) -> &Matrix4f {
        &self.matrix
    }

    /// The inverse matrix `M⁻¹`.
    #[inline]
    pub fn inverse_matrix(&self) -> &Matrix4f {
        &self.inverse
    }

    /// The inverse transform (the pair swapped).
    #[inline]
    pub fn inverse(&self) -> Self {
        Self {
            matrix: self.inverse,
            inverse: self.matrix,
        }
    }

    /// Appends a translation by `offset`.
    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        trace!(x = offset.x, y = offset.y, z = offset.z, "Transform::translate");
        let forward = translation(offset);
        let backward = translation(-offset);
        self.compose(&forward, &backward)
    }

    /// Appends a per-axis scale.
    ///
    /// Zero factors are accepted; their reciprocal makes `M⁻¹` infinite.
    pub fn scale(&mut self, factors: Vec3) -> &mut Self {
        trace!(x = factors.x, y = factors.y, z = factors.z, "Transform::scale");
        let inv = factors.recip();
        let forward = Matrix4f::diagonal(factors.x, factors.y, factors.z, 1.0);
        let backward = Matrix4f::diagonal(inv.x, inv.y, inv.z, 1.0);
        self.compose(&forward, &backward)
    }

    /// Appends a rotation of `degrees` around `axis` (right-handed).
    ///
    /// The axis is normalized first. The inverse is the transpose of the
    /// rotation matrix.
    pub fn rotate(&mut self, axis: Vec3, degrees: f32) -> &mut Self {
        trace!(x = axis.x, y = axis.y, z = axis.z, degrees, "Transform::rotate");
        let forward = rotation(axis.normalize(), degree_to_radian(degrees));
        let backward = forward.transpose();
        self.compose(&forward, &backward)
    }

    /// Applies the transform to a point, vector or normal.
    #[inline]
    pub fn apply<T: Transformable>(&self, value: T) -> T {
        value.transformed_by(self)
    }

    /// Returns true if both matrices are the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.matrix.is_identity() && self.inverse.is_identity()
    }

    /// Returns true if either matrix holds non-finite values.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.matrix.is_finite() || !self.inverse.is_finite()
    }

    /// Checks that both matrices are finite and still invert each other.
    pub fn validate(&self) -> Result<()> {
        if !self.matrix.is_finite() {
            return Err(Error::degenerate("forward matrix is not finite"));
        }
        if !self.inverse.is_finite() {
            return Err(Error::degenerate("inverse matrix is not finite"));
        }
        let product = self.matrix * self.inverse;
        if !product.abs_diff_eq(&Matrix4f::identity(), PAIR_TOLERANCE) {
            return Err(Error::degenerate("matrix and inverse do not multiply to identity"));
        }
        Ok(())
    }

    fn compose(&mut self, forward: &Matrix4f, backward: &Matrix4f) -> &mut Self {
        self.matrix *= *forward;
        self.inverse = backward * &self.inverse;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

// Transform * Transform: `rhs` acts first
impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            matrix: self.matrix * rhs.matrix,
            inverse: rhs.inverse * self.inverse,
        }
    }
}

impl Transformable for Point3 {
    fn transformed_by(self, transform: &Transform) -> Self {
        let [x, y, z, w] = transform.matrix.mul_vec4([self.x, self.y, self.z, 1.0]);
        Point3::new(x / w, y / w, z / w)
    }
}

impl Transformable for Vec3 {
    fn transformed_by(self, transform: &Transform) -> Self {
        let [x, y, z, _] = transform.matrix.mul_vec4([self.x, self.y, self.z, 0.0]);
        Vec3::new(x, y, z)
    }
}

impl Transformable for Normal3 {
    fn transformed_by(self, transform: &Transform) -> Self {
        let inv_t = transform.inverse.transpose();
        let [x, y, z, _] = inv_t.mul_vec4([self.x, self.y, self.z, 0.0]);
        Vec3::new(x, y, z).to_normal()
    }
}

/// Identity with `offset` in the last column.
fn translation(offset: Vec3) -> Matrix4f {
    let mut m = Matrix4f::identity();
    m[(0, 3)] = offset.x;
    m[(1, 3)] = offset.y;
    m[(2, 3)] = offset.z;
    m
}

/// Rodrigues rotation around the unit `axis` by `theta` radians.
fn rotation(axis: Vec3, theta: f32) -> Matrix4f {
    let (sin, cos) = theta.sin_cos();
    let Vec3 { x, y, z } = axis;
    let one_minus_cos = 1.0 - cos;

    Matrix4f::from_rows([
        [
            x * x + (1.0 - x * x) * cos,
            x * y * one_minus_cos - z * sin,
            x * z * one_minus_cos + y * sin,
            0.0,
        ],
        [
            x * y * one_minus_cos + z * sin,
            y * y + (1.0 - y * y) * cos,
            y * z * one_minus_cos - x * sin,
            0.0,
        ],
        [
            x * z * one_minus_cos - y * sin,
            y * z * one_minus_cos + x * sin,
            z * z + (1.0 - z * z) * cos,
            0.0,
        ],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
