//! Error types for explicit degeneracy reporting.
//!
//! The default transform operations never fail: singular matrices, zero scale
//! factors and zero-length axes propagate as `Inf`/`NaN`. Callers that prefer
//! to detect these cases up front use the checked entry points
//! (`Matrix4::try_inverse`, `Transform::from_matrix`, `Transform::validate`),
//! which report through [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use gm_core::{Error, Result};
//!
//! fn require_finite(values: &[f32]) -> Result<()> {
//!     if values.iter().all(|v| v.is_finite()) {
//!         Ok(())
//!     } else {
//!         Err(Error::non_finite("input"))
//!     }
//! }
//!
//! assert!(require_finite(&[1.0, f32::NAN]).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked transform operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Gauss-Jordan elimination found no usable pivot in a column.
    #[error("matrix is singular: no non-zero pivot in column {column}")]
    SingularMatrix {
        /// Column whose pivot candidates were all zero
        column: usize,
    },

    /// A computed value contains `Inf` or `NaN`.
    #[error("{what} contains non-finite values")]
    NonFinite {
        /// Description of the offending value
        what: String,
    },

    /// A transform's forward or inverse matrix is not finite, or the pair no
    /// longer multiplies to identity.
    #[error("degenerate transform: {reason}")]
    DegenerateTransform {
        /// Why the transform was rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(column: usize) -> Self {
        Self::SingularMatrix { column }
    }

    /// Creates an [`Error::NonFinite`] error.
    #[inline]
    pub fn non_finite(what: impl Into<String>) -> Self {
        Self::NonFinite { what: what.into() }
    }

    /// Creates an [`Error::DegenerateTransform`] error.
    #[inline]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateTransform {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error stems from a non-invertible matrix.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular() {
        let err = Error::singular(2);
        assert!(err.to_string().contains("column 2"));
        assert!(err.is_singular());
    }

    #[test]
    fn test_non_finite() {
        let err = Error::non_finite("inverse matrix");
        assert_eq!(err.to_string(), "inverse matrix contains non-finite values");
        assert!(!err.is_singular());
    }

    #[test]
    fn test_degenerate() {
        let err = Error::degenerate("zero scale on y");
        assert!(err.to_string().contains("zero scale on y"));
    }
}
