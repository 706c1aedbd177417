//! Orthonormal basis built from a single surface normal.
//!
//! Shading and sampling code works in a local frame where the surface normal
//! is +Z. [`Onb`] builds that frame: `w` is the normal itself, `v` and `u`
//! complete a right-handed set (`u × v = w`).
//!
//! # Usage
//!
//! ```rust
//! use gm_math::{Onb, Vec3};
//!
//! let onb = Onb::new(Vec3::new(0.0, 0.0, 1.0).to_normal());
//! let local = onb.convert_to_local(onb.w().to_vec());
//! assert_eq!(local, Vec3::Z);
//! ```

use std::ops::Index;

use crate::{Normal3, Vec3};

/// Above this `|n.x|` the helper axis switches from X to Y, keeping the
/// cross product away from zero length.
const X_ALIGNED: f32 = 0.9;

/// Right-handed orthonormal frame `(u, v, w)` with `w` equal to the input
/// normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onb {
    basis: [Normal3; 3],
}

impl Onb {
    /// Builds the frame around a unit normal.
    ///
    /// The normal is stored as `w` unchanged; pass a unit-length value.
    pub fn new(normal: Normal3) -> Self {
        let w = normal;
        let a = if normal.x.abs() > X_ALIGNED { Vec3::Y } else { Vec3::X };
        let v = w.cross(a).to_normal();
        let u = v.cross(w.to_vec()).to_normal();
        Self { basis: [u, v, w] }
    }

    /// First tangent.
    #[inline]
    pub fn u(&self) -> &Normal3 {
        &self.basis[0]
    }

    /// Second tangent.
    #[inline]
    pub fn v(&self) -> &Normal3 {
        &self.basis[1]
    }

    /// The normal.
    #[inline]
    pub fn w(&self) -> &Normal3 {
        &self.basis[2]
    }

    /// Expresses a world-space vector in `(u, v, w)` coordinates.
    #[inline]
    pub fn convert_to_local(&self, vec: Vec3) -> Vec3 {
        Vec3::new(self.u().dot(vec), self.v().dot(vec), self.w().dot(vec))
    }

    /// Maps local `(u, v, w)` coordinates back to world space:
    /// `x·u + y·v + z·w`.
    #[inline]
    pub fn convert_to_world(&self, local: Vec3) -> Vec3 {
        *self.u() * local.x + *self.v() * local.y + *self.w() * local.z
    }
}

impl Index<usize> for Onb {
    type Output = Normal3;

    #[inline]
    fn index(&self, i: usize) -> &Normal3 {
        &self.basis[i]
    }
}
