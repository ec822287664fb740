//! Ordered lists of filter operations.
//!
//! A [`FilterChain`] is the matrix-backed subset of a CSS `filter` value:
//! whitespace-separated filter functions applied left to right.
//!
//! # Example
//!
//! ```rust
//! use colorfx_core::ColorComponents;
//! use colorfx_ops::FilterChain;
//!
//! let chain: FilterChain = "sepia(100%) saturate(150%) hue-rotate(15deg)".parse().unwrap();
//! assert_eq!(chain.len(), 3);
//!
//! let out = chain.apply(&ColorComponents::new([0.8, 0.4, 0.2, 0.5]));
//! assert_eq!(out[3], 0.5);
//!
//! let mut pixels = vec![0.8f32, 0.4, 0.2, 1.0, 0.1, 0.2, 0.3, 1.0];
//! chain.apply_to_pixels(&mut pixels, 4).unwrap();
//! ```

use crate::{FilterOperation, OpsError, OpsResult};
use colorfx_core::ColorComponents;
use colorfx_math::{apply_matrices_to_color_components, ColorMatrix, ColorTransform};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// An ordered list of filter operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterChain {
    operations: Vec<FilterOperation>,
}

impl FilterChain {
    /// Creates an empty chain (the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation to the end of the chain.
    pub fn push(&mut self, operation: FilterOperation) {
        self.operations.push(operation);
    }

    /// Returns the operations in application order.
    pub fn operations(&self) -> &[FilterOperation] {
        &self.operations
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns true if the chain has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns the color matrix of each operation, in order.
    pub fn matrices(&self) -> Vec<ColorMatrix<3, 3>> {
        self.operations.iter().map(FilterOperation::color_matrix).collect()
    }

    /// Applies the chain to one color. Alpha passes through.
    pub fn apply(&self, color: &ColorComponents<f32>) -> ColorComponents<f32> {
        apply_matrices_to_color_components(color, self.operations.as_slice())
    }

    /// Applies the chain in place to interleaved RGB (`channels == 3`) or
    /// RGBA (`channels == 4`) pixels.
    ///
    /// Matrices are built once per call, not per pixel.
    pub fn apply_to_pixels(&self, pixels: &mut [f32], channels: usize) -> OpsResult<()> {
        trace!(len = pixels.len(), channels, operations = self.len(), "apply_to_pixels");
        check_pixel_layout(pixels.len(), channels)?;
        if self.is_empty() {
            return Ok(());
        }
        debug!(chain = %self, pixels = pixels.len() / channels, "Applying filter chain");

        let matrices = self.matrices();
        match channels {
            3 => pixels
                .chunks_exact_mut(3)
                .try_for_each(|pixel| transform_pixel::<3>(pixel, &matrices)),
            _ => pixels
                .chunks_exact_mut(4)
                .try_for_each(|pixel| transform_pixel::<4>(pixel, &matrices)),
        }
    }
}

/// Checks that `len` values form whole pixels of 3 or 4 channels.
pub(crate) fn check_pixel_layout(len: usize, channels: usize) -> OpsResult<()> {
    if channels != 3 && channels != 4 {
        return Err(OpsError::InvalidDimensions(format!(
            "expected 3 or 4 channels, got {channels}"
        )));
    }
    if len % channels != 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "buffer of {len} values is not a whole number of {channels}-channel pixels"
        )));
    }
    Ok(())
}

/// Runs one `N`-channel pixel through `matrices` in place.
pub(crate) fn transform_pixel<const N: usize>(
    pixel: &mut [f32],
    matrices: &[ColorMatrix<3, 3>],
) -> OpsResult<()> {
    let color = ColorComponents::<f32, N>::try_from(&*pixel)?;
    let out = apply_matrices_to_color_components(&color, matrices);
    pixel.copy_from_slice(out.as_slice());
    Ok(())
}

/// Splits CSS filter text into its functions.
pub(crate) fn parse_operations(text: &str) -> OpsResult<Vec<FilterOperation>> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }

    let mut operations = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let open = rest
            .find('(')
            .ok_or_else(|| OpsError::Syntax(format!("expected '(' after {rest:?}")))?;
        let close = rest[open..]
            .find(')')
            .map(|i| open + i)
            .ok_or_else(|| OpsError::Syntax(format!("unclosed '(' in {rest:?}")))?;
        let name = &rest[..open];
        if name.contains(char::is_whitespace) {
            return Err(OpsError::Syntax(format!("expected a filter function, got {name:?}")));
        }
        operations.push(FilterOperation::from_function(name, &rest[open + 1..close])?);
        rest = rest[close + 1..].trim_start();
    }
    Ok(operations)
}

impl FromStr for FilterChain {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        trace!(text = s, "parse filter chain");
        Ok(Self { operations: parse_operations(s)? })
    }
}

impl FromIterator<FilterOperation> for FilterChain {
    fn from_iter<I: IntoIterator<Item = FilterOperation>>(iter: I) -> Self {
        Self { operations: iter.into_iter().collect() }
    }
}

impl From<Vec<FilterOperation>> for FilterChain {
    fn from(operations: Vec<FilterOperation>) -> Self {
        Self { operations }
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        for (i, op) in self.operations.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

impl<const N: usize> ColorTransform<N> for FilterChain {
    fn transform_color_components(&self, input: &ColorComponents<f32, N>) -> ColorComponents<f32, N> {
        self.operations.as_slice().transform_color_components(input)
    }
}
