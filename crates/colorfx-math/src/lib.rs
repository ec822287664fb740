//! # colorfx-math
//!
//! Color matrices for filter effects.
//!
//! This crate provides:
//!
//! - [`ColorMatrix`] - compile-time-dimensioned matrices acting on
//!   [`ColorComponents`](colorfx_core::ColorComponents)
//! - Filter matrix factories: [`grayscale_color_matrix`],
//!   [`sepia_color_matrix`], [`saturation_color_matrix`],
//!   [`hue_rotate_color_matrix`]
//! - Composition of matrix chains: [`apply_matrices_to_color_components`],
//!   [`ColorTransform`], [`apply_matrices!`]
//!
//! # Design
//!
//! Matrix dimensions are const generic parameters. Mismatches that would
//! be runtime errors elsewhere (wrong coefficient count, more rows than
//! the color has components) fail the build instead. Everything except hue
//! rotation is a `const fn`.
//!
//! # Usage
//!
//! ```rust
//! use colorfx_core::ColorComponents;
//! use colorfx_math::{apply_matrices_to_color_components, hue_rotate_color_matrix, sepia_color_matrix};
//!
//! let color = ColorComponents::new([0.9, 0.4, 0.2, 1.0]);
//! let out = apply_matrices_to_color_components(
//!     &color,
//!     (sepia_color_matrix(0.8), hue_rotate_color_matrix(30.0)),
//! );
//! assert_eq!(out[3], 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - conversions for 3x3 matrices
//! - [`colorfx-core`] - Core types
//!
//! # Used By
//!
//! - `colorfx-ops` - filter operations and chains

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod compose;
mod filters;
mod matrix;

pub use compose::*;
pub use filters::*;
pub use matrix::*;
