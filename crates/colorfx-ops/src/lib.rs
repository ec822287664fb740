//! # colorfx-ops
//!
//! CSS filter operations built on colorfx color matrices.
//!
//! # Modules
//!
//! - [`FilterOperation`] - one filter function (`grayscale()`, `sepia()`,
//!   `saturate()`, `hue-rotate()`)
//! - [`FilterChain`] - an ordered list of operations, parsed from CSS
//!   filter text or deserialized with serde
//! - [`parallel`] - Rayon-backed pixel buffer application
//!
//! # Example
//!
//! ```rust
//! use colorfx_core::ColorComponents;
//! use colorfx_ops::{FilterChain, FilterOperation};
//!
//! let chain: FilterChain = "grayscale(40%) hue-rotate(0.25turn)".parse().unwrap();
//! assert_eq!(chain.operations()[0], FilterOperation::Grayscale { amount: 0.4 });
//!
//! let rgba = ColorComponents::new([0.9, 0.6, 0.3, 1.0]);
//! let filtered = chain.apply(&rgba);
//! assert_eq!(filtered[3], 1.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod chain;
mod error;
mod operation;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use chain::FilterChain;
pub use error::{OpsError, OpsResult};
pub use operation::FilterOperation;
