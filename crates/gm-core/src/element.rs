//! Element type capabilities for fixed-size matrices.
//!
//! [`Element`] is implemented for every primitive integer and floating point
//! type. It carries the equality strategy so that `Matrix4<i32>` compares
//! exactly while `Matrix4<f32>` tolerates rounding noise.
//!
//! [`FloatElement`] narrows to floating point types; it gates operations that
//! divide (inversion) and finiteness checks.

use std::fmt::Debug;

use num_traits::{Float, Num};

use crate::constants::EPSILON;

/// A numeric type usable as a matrix element.
///
/// # Example
///
/// ```rust
/// use gm_core::Element;
///
/// assert!(0.1f64.elem_eq(0.1 + 1e-9));
/// assert!(7u8.elem_eq(7));
/// ```
pub trait Element: Num + Copy + PartialOrd + Debug {
    /// Element-wise equality used by matrix and vector comparisons.
    fn elem_eq(self, other: Self) -> bool;
}

/// Floating point matrix element.
pub trait FloatElement: Element + Float {
    /// Tolerance used for pivot selection and equality, converted to `Self`.
    fn epsilon_value() -> Self;
}

macro_rules! impl_exact_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn elem_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn elem_eq(self, other: Self) -> bool {
                    (self - other).abs() < EPSILON as $t
                }
            }

            impl FloatElement for $t {
                #[inline]
                fn epsilon_value() -> Self {
                    EPSILON as $t
                }
            }
        )*
    };
}

impl_exact_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_element!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_exact() {
        assert!(5i64.elem_eq(5));
        assert!(!5i64.elem_eq(6));
        assert!(!0usize.elem_eq(1));
    }

    #[test]
    fn test_float_tolerance() {
        assert!(1.0f32.elem_eq(1.0 + 5e-6));
        assert!(!1.0f32.elem_eq(1.0 + 2e-5));
        assert!(2.0f64.elem_eq(2.0 - 9e-6));
    }

    #[test]
    fn test_nan_never_equal() {
        assert!(!f32::NAN.elem_eq(f32::NAN));
        assert!(!f64::INFINITY.elem_eq(f64::INFINITY));
    }

    #[test]
    fn test_epsilon_value() {
        assert_eq!(f32::epsilon_value(), EPSILON);
        assert!((f64::epsilon_value() - 1e-5).abs() < 1e-12);
    }
}
