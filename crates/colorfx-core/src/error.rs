//! Error types for colorfx-core operations.
//!
//! The matrix engine itself has no runtime failure modes: dimension and
//! arity contracts are checked at compile time. Errors only appear at the
//! edges where runtime-sized data (slices, parsed text) is turned into the
//! fixed-size types of this crate.
//!
//! # Usage
//!
//! ```rust
//! use colorfx_core::{ColorComponents, Error};
//!
//! let values = [0.5f32, 0.25];
//! let err = ColorComponents::<f32, 4>::try_from(&values[..]).unwrap_err();
//! assert!(matches!(err, Error::ComponentCountMismatch { expected: 4, got: 2 }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::components::ColorComponents`] - slice conversion
//! - `colorfx-ops` - pixel buffer handling

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when runtime data does not fit a fixed-size color type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A slice had a different length than the fixed component count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorfx_core::Error;
    ///
    /// let err = Error::component_count_mismatch(4, 3);
    /// assert_eq!(err.to_string(), "component count mismatch: expected 4, got 3");
    /// ```
    #[error("component count mismatch: expected {expected}, got {got}")]
    ComponentCountMismatch {
        /// Component count of the target type
        expected: usize,
        /// Length of the provided data
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::ComponentCountMismatch`] error.
    #[inline]
    pub fn component_count_mismatch(expected: usize, got: usize) -> Self {
        Self::ComponentCountMismatch { expected, got }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_count_mismatch() {
        let err = Error::component_count_mismatch(4, 7);
        let msg = err.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('7'));
    }
}
