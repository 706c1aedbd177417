//! # gm-math
//!
//! Geometric transforms for rendering pipelines.
//!
//! - [`Matrix4`] - Generic 4x4 matrix with Gauss-Jordan inversion
//! - [`Transform`] - Forward/inverse matrix pair built from translate, scale
//!   and rotate
//! - [`Onb`] - Orthonormal shading frame from a single normal
//! - [`Vec3`], [`Point3`], [`Normal3`] - The values transforms act on
//!
//! # Design
//!
//! All matrices are **row-major** and act on **column vectors**; translation
//! sits in the last column. Points, vectors and normals are distinct types
//! because a transform treats them differently:
//!
//! | value      | homogeneous form | matrix used |
//! |------------|------------------|-------------|
//! | [`Point3`] | `(x, y, z, 1)`   | `M`, then divide by `w` |
//! | [`Vec3`]   | `(x, y, z, 0)`   | `M` |
//! | [`Normal3`]| `(x, y, z, 0)`   | `(M⁻¹)ᵀ`, then normalize |
//!
//! # Usage
//!
//! ```rust
//! use gm_math::{Point3, Transform, Vec3};
//!
//! let mut t = Transform::new();
//! t.translate(Vec3::new(0.0, 0.0, 7.0))
//!     .rotate(Vec3::X, 90.0);
//!
//! let p = t.apply(Point3::new(1.0, 1.0, 1.0));
//! assert_eq!(p, Point3::new(1.0, -1.0, 8.0));
//! ```
//!
//! # Dependencies
//!
//! - `gm-core` - Element capabilities, constants, errors
//! - [`glam`] - Interop with SIMD math types
//! - [`approx`] - Tolerance comparisons with an explicit epsilon
//! - `tracing` - Trace events for transform composition

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
mod normal3;
mod onb;
mod point3;
mod scalar;
mod transform;
mod vec3;

pub use mat4::*;
pub use normal3::*;
pub use onb::*;
pub use point3::*;
pub use scalar::*;
pub use transform::*;
pub use vec3::*;

pub use gm_core::{EPSILON, Element, Error, FloatElement, Result};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Vec3 as GlamVec3};
}
