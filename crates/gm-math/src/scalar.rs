//! Scalar helpers used alongside the transform code.
//!
//! - Angle conversion ([`degree_to_radian`])
//! - Interpolation ([`lerp`])
//! - Ray/quadric intersection support ([`solve_quadratic`])
//! - Multiple importance sampling weights ([`power_heuristic`])
//! - Constant-evaluable integer square root ([`isqrt_ceil`])
//!
//! # Usage
//!
//! ```rust
//! use gm_math::{lerp, solve_quadratic};
//!
//! assert_eq!(lerp(0.5, 0.0, 10.0), 5.0);
//! assert_eq!(solve_quadratic(1.0, 0.0, -4.0), Some((-2.0, 2.0)));
//! ```

use gm_core::PI;
use num_traits::Float;

/// Converts degrees to radians.
///
/// # Example
///
/// ```rust
/// use gm_math::degree_to_radian;
///
/// assert!((degree_to_radian(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
#[inline]
pub fn degree_to_radian(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Linear interpolation with the parameter first.
///
/// Returns `v1` at `t = 0` and `v2` at `t = 1`: `(1 - t) * v1 + t * v2`.
#[inline]
pub fn lerp<T: Float>(t: T, v1: T, v2: T) -> T {
    (T::one() - t) * v1 + t * v2
}

/// Real roots of `a·x² + b·x + c = 0`, smallest first.
///
/// Returns `None` when the discriminant is negative. A zero discriminant
/// yields the double root twice. Uses the `q = -½(b ± √Δ)` form, which avoids
/// cancellation when `b² ≫ 4ac`.
///
/// `a` is not checked for zero; a linear equation produces non-finite roots.
pub fn solve_quadratic<T: Float>(a: T, b: T, c: T) -> Option<(T, T)> {
    let two = T::one() + T::one();
    let four = two + two;
    let half = T::one() / two;

    let discr = b * b - four * a * c;
    if discr < T::zero() {
        return None;
    }
    if discr == T::zero() {
        let root = -half * b / a;
        return Some((root, root));
    }

    let sqrt_discr = discr.sqrt();
    let q = if b > T::zero() {
        -half * (b + sqrt_discr)
    } else {
        -half * (b - sqrt_discr)
    };

    let r0 = q / a;
    let r1 = c / q;
    Some(if r0 > r1 { (r1, r0) } else { (r0, r1) })
}

/// Power heuristic (β = 2) weight for combining `nf` samples from strategy
/// `f` with `ng` samples from strategy `g`.
#[inline]
pub fn power_heuristic(nf: u32, f_pdf: f32, ng: u32, g_pdf: f32) -> f32 {
    let f = nf as f32 * f_pdf;
    let g = ng as f32 * g_pdf;
    (f * f) / (f * f + g * g)
}

/// Smallest `r` with `r * r >= n`, usable in constant expressions.
///
/// ```rust
/// use gm_math::isqrt_ceil;
///
/// const SIDE: u64 = isqrt_ceil(349);
/// assert_eq!(SIDE, 19);
/// ```
pub const fn isqrt_ceil(n: u64) -> u64 {
    let mut lo = 0u64;
    let mut hi = if n < (1 << 32) { n } else { 1 << 32 };
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if (mid as u128) * (mid as u128) >= n as u128 {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    hi
}
