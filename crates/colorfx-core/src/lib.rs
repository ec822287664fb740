//! # colorfx-core
//!
//! Core types for color filter effects.
//!
//! This crate provides the foundational types used throughout colorfx:
//!
//! - [`ColorComponents`] - Fixed-size color vector with a compile-time size
//! - [`REC709_LUMA`] and friends - Luminance weights shared by filter matrices
//! - [`Error`] - Failures when runtime data meets fixed-size types
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other colorfx crates
//! depend on `colorfx-core`:
//!
//! ```text
//! colorfx-core (this crate)
//!    ^
//!    |
//!    +-- colorfx-math (color matrices, filter factories, composition)
//!    +-- colorfx-ops (filter operations and chains)
//!    +-- colorfx-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod error;

pub use components::{
    luminance_rec709, ColorComponents, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R,
};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use colorfx_core::prelude::*;
///
/// let c: ColorComponents<f32> = ColorComponents::new([1.0, 0.0, 0.0, 1.0]);
/// assert_eq!(c[0], 1.0);
/// ```
pub mod prelude {
    pub use crate::components::{luminance_rec709, ColorComponents, REC709_LUMA};
    pub use crate::error::{Error, Result};
}
