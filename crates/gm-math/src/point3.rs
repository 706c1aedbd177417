//! 3D position.
//!
//! Points differ from [`Vec3`] only in how transforms treat them: a point
//! carries homogeneous coordinate `w = 1`, so translation moves it.

use std::ops::{Add, Index, Sub};

use approx::AbsDiffEq;
use gm_core::Element;

use crate::Vec3;

/// A position in 3D space.
///
/// # Example
///
/// ```rust
/// use gm_math::{Point3, Vec3};
///
/// let a = Point3::new(1.0, 1.0, 1.0);
/// let b = a + Vec3::new(0.0, 0.0, 7.0);
/// assert_eq!(b - a, Vec3::new(0.0, 0.0, 7.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Point3 {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Point3 {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Displacement from the origin.
    #[inline]
    pub const fn to_vec(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Returns true if all coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_vec().is_finite()
    }
}

impl PartialEq for Point3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.elem_eq(other.x) && self.y.elem_eq(other.y) && self.z.elem_eq(other.z)
    }
}

impl AbsDiffEq for Point3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        gm_core::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_vec().abs_diff_eq(&other.to_vec(), epsilon)
    }
}

impl Index<usize> for Point3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index out of bounds: {}", i),
        }
    }
}

// Point3 - Point3 = Vec3
impl Sub for Point3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Self) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Point3 + Vec3 = Point3
impl Add<Vec3> for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Vec3) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Point3 - Vec3 = Point3
impl Sub<Vec3> for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Vec3) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(4.0, 6.0, 3.0);
        assert_eq!(q - p, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(p.distance(q), 5.0);
        assert_eq!(p + Vec3::X, Point3::new(2.0, 2.0, 3.0));
        assert_eq!(p - Vec3::X, Point3::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn test_point_tolerant_eq() {
        assert_eq!(Point3::new(1.0, -1.0, 1.0), Point3::new(1.0, -1.0 + 4e-8, 1.0));
        assert_ne!(Point3::ORIGIN, Point3::new(0.0, 0.0, 1e-3));
    }
}
