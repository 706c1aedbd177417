//! 4x4 matrix type for homogeneous transforms.
//!
//! [`Matrix4`] is generic over its element type. Integer matrices compare
//! exactly, floating point matrices compare with [`gm_core::EPSILON`]
//! tolerance; see [`gm_core::Element`].
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**.
//! Translation lives in the last column:
//!
//! ```text
//! | m00 m01 m02 tx |   | x |
//! | m10 m11 m12 ty | * | y |
//! | m20 m21 m22 tz |   | z |
//! | m30 m31 m32 m33|   | w |
//! ```
//!
//! # Inversion
//!
//! [`Matrix4::inverse`] runs Gauss-Jordan elimination on `[M | I]` with row
//! swapping when a pivot is zero. Singular input is not detected: the zero
//! pivot is divided through and the result holds `Inf`/`NaN`. That is the
//! defined behaviour of the fast path. [`Matrix4::try_inverse`] performs the
//! same elimination and reports singularity as an [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use gm_math::Matrix4;
//!
//! let m = Matrix4::from_rows([
//!     [2.0f32, 0.0, 0.0, 1.0],
//!     [0.0, 4.0, 0.0, 2.0],
//!     [0.0, 0.0, 8.0, 3.0],
//!     [0.0, 0.0, 0.0, 1.0],
//! ]);
//! assert_eq!(m.inverse() * m, Matrix4::identity());
//! ```

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use approx::{AbsDiffEq, RelativeEq};
use gm_core::{Element, Error, FloatElement, Result};
use tracing::debug;

/// A 4x4 matrix.
///
/// Always fully populated. `Copy`, so every operation returns a new value and
/// `*=` replaces only the receiver.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Matrix4<T: Element> {
    m: [[T; 4]; 4],
}

/// Single precision matrix, the type used by [`Transform`](crate::Transform).
pub type Matrix4f = Matrix4<f32>;

impl<T: Element> Matrix4<T> {
    /// Creates a matrix from 16 values in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        a00: T, a01: T, a02: T, a03: T,
        a10: T, a11: T, a12: T, a13: T,
        a20: T, a21: T, a22: T, a23: T,
        a30: T, a31: T, a32: T, a33: T,
    ) -> Self {
        Self {
            m: [
                [a00, a01, a02, a03],
                [a10, a11, a12, a13],
                [a20, a21, a22, a23],
                [a30, a31, a32, a33],
            ],
        }
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix with every element set to `value`.
    #[inline]
    pub fn fill_with(value: T) -> Self {
        Self { m: [[value; 4]; 4] }
    }

    /// Identity matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gm_math::Matrix4;
    ///
    /// let i = Matrix4::<i32>::identity();
    /// assert_eq!(i[(2, 2)], 1);
    /// assert_eq!(i[(2, 3)], 0);
    /// ```
    #[inline]
    pub fn identity() -> Self {
        let mut result = Self::fill_with(T::zero());
        for i in 0..4 {
            result.m[i][i] = T::one();
        }
        result
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub fn diagonal(d0: T, d1: T, d2: T, d3: T) -> Self {
        let mut result = Self::fill_with(T::zero());
        result.m[0][0] = d0;
        result.m[1][1] = d1;
        result.m[2][2] = d2;
        result.m[3][3] = d3;
        result
    }

    /// Returns the row arrays.
    #[inline]
    pub const fn to_rows(&self) -> [[T; 4]; 4] {
        self.m
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> [T; 4] {
        self.m[i]
    }

    /// Returns column `j`.
    #[inline]
    pub fn col(&self, j: usize) -> [T; 4] {
        [self.m[0][j], self.m[1][j], self.m[2][j], self.m[3][j]]
    }

    /// Returns the transpose, `result[i][j] = self[j][i]`.
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut result = *self;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[j][i];
            }
        }
        result
    }

    /// Matrix product, `c[i][j] = Σ_k a[i][k] * b[k][j]`.
    #[inline]
    pub fn multiply(a: &Self, b: &Self) -> Self {
        let mut c = Self::fill_with(T::zero());
        for i in 0..4 {
            for j in 0..4 {
                c.m[i][j] = a.m[i][0] * b.m[0][j]
                    + a.m[i][1] * b.m[1][j]
                    + a.m[i][2] * b.m[2][j]
                    + a.m[i][3] * b.m[3][j];
            }
        }
        c
    }

    /// Multiplies a homogeneous column vector, `M * v`.
    #[inline]
    pub fn mul_vec4(&self, v: [T; 4]) -> [T; 4] {
        let mut out = [T::zero(); 4];
        for (i, row) in self.m.iter().enumerate() {
            out[i] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3];
        }
        out
    }

    /// Returns true if this is the identity matrix under the element's
    /// equality.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl<T: FloatElement> Matrix4<T> {
    /// Computes the inverse by Gauss-Jordan elimination.
    ///
    /// Each column's pivot is checked against the element epsilon; a zero
    /// pivot is replaced by the largest-magnitude entry below it in the same
    /// column. If every candidate is zero the matrix is singular and the
    /// division by the zero pivot leaves `Inf`/`NaN` in the returned matrix.
    /// No panic, no error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gm_math::Matrix4;
    ///
    /// let singular = Matrix4::<f32>::fill_with(1.0);
    /// assert!(!singular.inverse().is_finite());
    /// ```
    pub fn inverse(&self) -> Self {
        let mut work = *self;
        let mut inv = Self::identity();
        for i in 0..4 {
            work.eliminate_column(&mut inv, i);
        }
        inv
    }

    /// Computes the inverse, reporting singular input.
    ///
    /// Returns [`Error::SingularMatrix`] when a column is left with a zero
    /// pivot after the row swap, and [`Error::NonFinite`] when the elimination
    /// produced non-finite values (for example from non-finite input). The
    /// epsilon only decides whether to search for a larger pivot, so
    /// well-conditioned matrices with small entries still invert.
    pub fn try_inverse(&self) -> Result<Self> {
        let mut work = *self;
        let mut inv = Self::identity();
        for i in 0..4 {
            if !work.eliminate_column(&mut inv, i) {
                debug!(column = i, "Matrix4::try_inverse: singular pivot");
                return Err(Error::singular(i));
            }
        }
        if !inv.is_finite() {
            return Err(Error::non_finite("inverse matrix"));
        }
        Ok(inv)
    }

    /// One Gauss-Jordan step on column `i` of `[self | inv]`.
    ///
    /// Returns false when the pivot is exactly zero after the row swap.
    fn eliminate_column(&mut self, inv: &mut Self, i: usize) -> bool {
        let eps = T::epsilon_value();

        if self.m[i][i].abs() < eps {
            let mut big = i;
            for j in (i + 1)..4 {
                if self.m[j][i].abs() > self.m[big][i].abs() {
                    big = j;
                }
            }
            if big != i {
                self.m.swap(i, big);
                inv.m.swap(i, big);
            }
        }

        let pivot = self.m[i][i];
        let usable = pivot != T::zero();
        for k in 0..4 {
            self.m[i][k] = self.m[i][k] / pivot;
            inv.m[i][k] = inv.m[i][k] / pivot;
        }

        for j in 0..4 {
            if j == i {
                continue;
            }
            let coefficient = self.m[j][i] / self.m[i][i];
            if coefficient == T::zero() {
                continue;
            }
            for k in 0..4 {
                self.m[j][k] = self.m[j][k] - coefficient * self.m[i][k];
                inv.m[j][k] = inv.m[j][k] - coefficient * inv.m[i][k];
            }
        }

        usable
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }
}

impl Matrix4<f32> {
    /// Converts to glam Mat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_rows(m.to_cols_array_2d()).transpose()
    }
}

impl<T: Element> Default for Matrix4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Element> PartialEq for Matrix4<T> {
    fn eq(&self, other: &Self) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.elem_eq(*b))
    }
}

impl<T: Element + AbsDiffEq> AbsDiffEq for Matrix4<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Element + RelativeEq> RelativeEq for Matrix4<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.m[i][j]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix4<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.m[i][j]
    }
}

// Matrix4 * Matrix4
impl<T: Element> Mul for Matrix4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::multiply(&self, &rhs)
    }
}

impl<T: Element> Mul for &Matrix4<T> {
    type Output = Matrix4<T>;

    #[inline]
    fn mul(self, rhs: Self) -> Matrix4<T> {
        Matrix4::multiply(self, rhs)
    }
}

impl<T: Element> MulAssign for Matrix4<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = Self::multiply(self, &rhs);
    }
}

impl<T: Element + fmt::Display> fmt::Display for Matrix4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match precision {
                    Some(p) => write!(f, "{:>10.*}", p, value)?,
                    None => write!(f, "{:>10}", value)?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[rustfmt::skip]
    fn sample<T: Element + From<u8>>() -> Matrix4<T> {
        let v = |x: u8| T::from(x);
        Matrix4::new(
            v(1),  v(2),  v(3),  v(4),
            v(5),  v(6),  v(7),  v(8),
            v(9),  v(10), v(11), v(12),
            v(13), v(14), v(15), v(16),
        )
    }

    #[test]
    fn test_identity_matches_explicit() {
        #[rustfmt::skip]
        let explicit = Matrix4::new(
            1, 0, 0, 0,
            0, 1, 0, 0,
            0, 0, 1, 0,
            0, 0, 0, 1,
        );
        assert_eq!(Matrix4::<i32>::identity(), explicit);
        assert_eq!(Matrix4::<i64>::identity(), Matrix4::from_rows(explicit.to_rows().map(|r| r.map(i64::from))));
        assert!(Matrix4::<f64>::identity().is_identity());
    }

    #[test]
    fn test_transpose() {
        #[rustfmt::skip]
        let transposed = Matrix4::new(
            1, 5,  9, 13,
            2, 6, 10, 14,
            3, 7, 11, 15,
            4, 8, 12, 16,
        );
        assert_eq!(sample::<i32>().transpose(), transposed);
        assert_eq!(sample::<f32>().transpose().transpose(), sample::<f32>());
    }

    #[test]
    fn test_fill_with() {
        let m = Matrix4::fill_with(7u16);
        assert!(m.to_rows().iter().flatten().all(|&x| x == 7));
    }

    #[test]
    fn test_identity_is_multiplicative_identity() {
        let a = sample::<i64>();
        assert_eq!(a * Matrix4::identity(), a);
        assert_eq!(Matrix4::identity() * a, a);
    }

    #[test]
    fn test_multiply() {
        let a = sample::<i32>();
        let c = a * a;
        assert_eq!(c[(0, 0)], 90);
        assert_eq!(c[(0, 3)], 120);
        assert_eq!(c[(3, 0)], 426);
        assert_eq!(c[(3, 3)], 600);

        let mut b = a;
        b *= Matrix4::diagonal(2, 2, 2, 2);
        assert_eq!(b[(1, 2)], 14);
        // `*=` does not touch the source value
        assert_eq!(a[(1, 2)], 7);
    }

    #[test]
    fn test_integer_equality_is_exact() {
        let a = sample::<i32>();
        let mut b = a;
        b[(2, 1)] += 1;
        assert_ne!(a, b);
    }

    #[test]
    fn test_float_equality_is_tolerant() {
        let a = sample::<f32>();
        let mut b = a;
        b[(2, 1)] += 1e-6;
        assert_eq!(a, b);
        b[(2, 1)] += 1e-3;
        assert_ne!(a, b);
    }

    #[test]
    fn test_inverse() {
        #[rustfmt::skip]
        let m = Matrix4::new(
            4.0f64, 7.0, 2.0, 3.0,
            0.0,    5.0, 0.0, 1.0,
            1.0,    0.0, 3.0, 2.0,
            2.0,    1.0, 0.0, 6.0,
        );
        let inv = m.inverse();
        assert_abs_diff_eq!(inv * m, Matrix4::identity(), epsilon = 1e-4);
        assert_abs_diff_eq!(m * inv, Matrix4::identity(), epsilon = 1e-4);
    }

    #[test]
    fn test_inverse_zero_pivot_swaps_rows() {
        // Permutation-like matrix: every diagonal element is zero
        #[rustfmt::skip]
        let m = Matrix4::new(
            0.0f32, 2.0, 0.0, 0.0,
            0.0,    0.0, 0.0, 3.0,
            4.0,    0.0, 0.0, 0.0,
            0.0,    0.0, 5.0, 0.0,
        );
        let inv = m.inverse();
        assert!(inv.is_finite());
        assert_abs_diff_eq!(inv * m, Matrix4::identity(), epsilon = 1e-4);
        assert_eq!(m.try_inverse().unwrap(), inv);
    }

    #[test]
    fn test_inverse_singular_is_non_finite() {
        let m = sample::<f32>();
        assert!(!m.inverse().is_finite());
        assert!(!Matrix4::<f64>::fill_with(0.0).inverse().is_finite());
    }

    #[test]
    fn test_try_inverse_singular() {
        let err = Matrix4::<f32>::fill_with(1.0).try_inverse().unwrap_err();
        assert!(err.is_singular());

        let mut nan = Matrix4::<f32>::identity();
        nan[(0, 3)] = f32::NAN;
        assert_eq!(nan.try_inverse(), Err(Error::non_finite("inverse matrix")));
    }

    #[test]
    fn test_try_inverse_small_scale() {
        let m = Matrix4::<f32>::diagonal(1e-6, 1e-6, 1e-6, 1.0);
        let inv = m.try_inverse().unwrap();
        assert_relative_eq!(inv[(0, 0)], 1e6, max_relative = 1e-5);
        assert_relative_eq!(inv[(2, 2)], 1e6, max_relative = 1e-5);
        assert_eq!(inv[(3, 3)], 1.0);
        assert_eq!(inv, m.inverse());

        // Small pivot below epsilon that still needs a swap
        #[rustfmt::skip]
        let swapped = Matrix4::new(
            0.0f64, 1e-7, 0.0, 0.0,
            1e-7,   0.0,  0.0, 0.0,
            0.0,    0.0,  1.0, 0.0,
            0.0,    0.0,  0.0, 1.0,
        );
        let inv = swapped.try_inverse().unwrap();
        assert_relative_eq!(inv[(0, 1)], 1e7, max_relative = 1e-9);
        assert_relative_eq!(inv[(1, 0)], 1e7, max_relative = 1e-9);
    }

    #[test]
    fn test_mul_vec4() {
        let m = Matrix4::<f32>::from_rows([
            [1.0, 0.0, 0.0, 5.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(m.mul_vec4([1.0, 1.0, 1.0, 1.0]), [6.0, 2.0, 1.0, 1.0]);
        assert_eq!(m.mul_vec4([1.0, 1.0, 1.0, 0.0]), [1.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rows_cols() {
        let m = sample::<u32>();
        assert_eq!(m.row(1), [5, 6, 7, 8]);
        assert_eq!(m.col(1), [2, 6, 10, 14]);
    }

    #[test]
    fn test_glam_roundtrip() {
        let m = sample::<f32>();
        let g = m.to_glam();
        // glam stores columns; translation column of a row-major matrix is col 3
        assert_eq!(g.col(3).x, 4.0);
        assert_eq!(Matrix4::from_glam(g), m);
    }

    #[test]
    fn test_display() {
        let s = format!("{:.1}", Matrix4::<f32>::identity());
        assert_eq!(s.lines().count(), 4);
        assert!(s.starts_with("[       1.0"));
    }
}
