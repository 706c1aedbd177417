//! Numeric constants used across the engine.
//!
//! All values are `f32`, the working precision of `gm_math::Transform` and
//! the primitive vector types.

/// Absolute tolerance for floating point equality.
pub const EPSILON: f32 = 1e-5;

/// Largest finite `f32`.
pub const MAX_FLOAT: f32 = f32::MAX;

/// Most negative finite `f32`.
pub const MIN_FLOAT: f32 = f32::MIN;

/// Archimedes' constant.
pub const PI: f32 = std::f32::consts::PI;

/// 1 / π.
pub const INV_PI: f32 = std::f32::consts::FRAC_1_PI;
