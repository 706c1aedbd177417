//! # gm-core
//!
//! Core types shared by the gm transform engine.
//!
//! - [`Element`] / [`FloatElement`] - Capability split for matrix element types
//! - [`constants`] - Tolerance and angle constants
//! - [`Error`] / [`Result`] - Explicit degeneracy reporting
//!
//! ## Crate Structure
//!
//! ```text
//! gm-core (this crate)
//!    ^
//!    |
//!    +-- gm-math (vectors, Matrix4, Transform, Onb)
//!    +-- gm-cli (command-line front end)
//! ```
//!
//! ## Equality strategy
//!
//! Integer element types compare exactly, floating point element types compare
//! with an absolute tolerance of [`EPSILON`]. The choice is made by the element
//! type itself through [`Element::elem_eq`]:
//!
//! ```rust
//! use gm_core::Element;
//!
//! assert!(1.0f32.elem_eq(1.0 + 1e-7));
//! assert!(!3i32.elem_eq(4));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod constants;
pub mod element;
pub mod error;

pub use constants::*;
pub use element::*;
pub use error::*;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::constants::EPSILON;
    pub use crate::element::{Element, FloatElement};
    pub use crate::error::{Error, Result};
}
