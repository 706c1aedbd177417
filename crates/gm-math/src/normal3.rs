//! Surface normal.
//!
//! A [`Normal3`] is a direction perpendicular to a surface. It is kept as a
//! separate type from [`Vec3`] because it transforms differently: under a
//! matrix `M` a normal must be multiplied by `(M⁻¹)ᵀ`, otherwise non-uniform
//! scale tilts it off the surface. See [`Transform::apply`](crate::Transform::apply).

use std::ops::{Index, Mul, Neg};

use approx::AbsDiffEq;
use gm_core::Element;

use crate::Vec3;

/// A surface normal.
///
/// Construction does not normalize; use [`Vec3::to_normal`] or
/// [`Normal3::normalize`] for unit length.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Normal3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Normal3 {
    /// Creates a new normal from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Reinterprets the normal as a plain vector.
    #[inline]
    pub const fn to_vec(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Dot product with a vector.
    #[inline]
    pub fn dot(self, v: Vec3) -> f32 {
        self.to_vec().dot(v)
    }

    /// Cross product with a vector.
    #[inline]
    pub fn cross(self, v: Vec3) -> Vec3 {
        self.to_vec().cross(v)
    }

    /// Length of the normal.
    #[inline]
    pub fn length(self) -> f32 {
        self.to_vec().length()
    }

    /// Rescales to unit length; zero length yields NaN.
    #[inline]
    pub fn normalize(self) -> Self {
        self.to_vec().to_normal()
    }

    /// Flips the normal to lie in the same hemisphere as `v`.
    #[inline]
    pub fn face_forward(self, v: Vec3) -> Self {
        if self.dot(v) < 0.0 { -self } else { self }
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_vec().is_finite()
    }
}

impl Default for Normal3 {
    /// The +X axis.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl PartialEq for Normal3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.elem_eq(other.x) && self.y.elem_eq(other.y) && self.z.elem_eq(other.z)
    }
}

impl AbsDiffEq for Normal3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        gm_core::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_vec().abs_diff_eq(&other.to_vec(), epsilon)
    }
}

impl Index<usize> for Normal3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Normal3 index out of bounds: {}", i),
        }
    }
}

impl Neg for Normal3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Normal3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        self.to_vec() * rhs
    }
}

impl From<Normal3> for Vec3 {
    #[inline]
    fn from(n: Normal3) -> Vec3 {
        n.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_x_axis() {
        assert_eq!(Normal3::default(), Normal3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_to_normal_normalizes() {
        let n = Vec3::new(0.0, 2.0, 0.0).to_normal();
        assert_eq!(n, Normal3::new(0.0, 1.0, 0.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_face_forward() {
        let n = Normal3::new(0.0, 0.0, 1.0);
        assert_eq!(n.face_forward(Vec3::new(0.0, 0.0, -1.0)), -n);
        assert_eq!(n.face_forward(Vec3::Z), n);
    }

    #[test]
    fn test_cross_with_vector() {
        let n = Normal3::new(0.0, 0.0, 1.0);
        assert_eq!(n.cross(Vec3::X), Vec3::Y);
    }
}
