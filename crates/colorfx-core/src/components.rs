//! Fixed-size color component vectors.
//!
//! [`ColorComponents`] is the vector type that color matrices read from and
//! write to. Its length is a const generic parameter, so every consumer can
//! branch on the component count at compile time.
//!
//! # Layout
//!
//! Components are stored in channel order, e.g. `[R, G, B, A]` for the
//! default four-component form. The type is `#[repr(transparent)]` over
//! `[T; N]`.
//!
//! ```
//! use colorfx_core::ColorComponents;
//!
//! let mut rgba = ColorComponents::new([1.0f32, 0.5, 0.25, 1.0]);
//! rgba[3] = 0.5;
//! assert_eq!(rgba.to_array(), [1.0, 0.5, 0.25, 0.5]);
//! assert_eq!(ColorComponents::<f32>::SIZE, 4);
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

// ============================================================================
// Rec.709 Luminance Constants
// ============================================================================

/// Rec.709 luminance coefficient for red channel.
///
/// Used in the standard luminance formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f32; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Calculate Rec.709 luminance from RGB values.
///
/// # Example
/// ```
/// use colorfx_core::luminance_rec709;
/// let luma = luminance_rec709([0.5, 0.3, 0.2]);
/// assert!((luma - 0.3353).abs() < 0.0001);
/// ```
#[inline]
pub fn luminance_rec709(rgb: [f32; 3]) -> f32 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

/// A color as a fixed-size vector of `N` components.
///
/// `N` defaults to 4 (RGBA). Matrices with fewer rows than `N` leave the
/// trailing components untouched, which is how alpha survives a 3x3
/// color matrix.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct ColorComponents<T, const N: usize = 4> {
    /// Component values in channel order.
    pub components: [T; N],
}

impl<T, const N: usize> ColorComponents<T, N> {
    /// Number of components.
    pub const SIZE: usize = N;

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// Returns the components as an array.
    #[inline]
    pub const fn to_array(&self) -> [T; N]
    where
        T: Copy,
    {
        self.components
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Iterates over the components in channel order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Applies a function to each component.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ColorComponents<U, N> {
        ColorComponents::new(self.components.map(f))
    }
}

impl<T: Default, const N: usize> Default for ColorComponents<T, N> {
    fn default() -> Self {
        Self::new(std::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> Index<usize> for ColorComponents<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.components[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for ColorComponents<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.components[i]
    }
}

impl<T, const N: usize> From<[T; N]> for ColorComponents<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T, const N: usize> From<ColorComponents<T, N>> for [T; N] {
    #[inline]
    fn from(c: ColorComponents<T, N>) -> Self {
        c.components
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for ColorComponents<T, N> {
    type Error = Error;

    /// Copies exactly `N` values out of a slice.
    fn try_from(values: &[T]) -> Result<Self> {
        let components: [T; N] = values
            .try_into()
            .map_err(|_| Error::component_count_mismatch(N, values.len()))?;
        Ok(Self::new(components))
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ColorComponents<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ColorComponents").field(&self.components).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for ColorComponents<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_zero() {
        let c = ColorComponents::<f32>::default();
        assert_eq!(c.to_array(), [0.0; 4]);
    }

    #[test]
    fn test_index_read_write() {
        let mut c = ColorComponents::new([0.1f32, 0.2, 0.3]);
        c[1] = 0.9;
        assert_eq!(c[0], 0.1);
        assert_eq!(c[1], 0.9);
        assert_eq!(ColorComponents::<f32, 3>::SIZE, 3);
    }

    #[test]
    fn test_try_from_slice() {
        let data = [0.1f32, 0.2, 0.3, 0.4, 0.5];
        let c = ColorComponents::<f32, 4>::try_from(&data[1..]).unwrap();
        assert_eq!(c.to_array(), [0.2, 0.3, 0.4, 0.5]);

        let err = ColorComponents::<f32, 4>::try_from(&data[..]).unwrap_err();
        assert_eq!(err, Error::component_count_mismatch(4, 5));
    }

    #[test]
    fn test_map() {
        let c = ColorComponents::new([1.0f32, 2.0, 3.0, 4.0]).map(|v| v * 0.5);
        assert_eq!(c.to_array(), [0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_display() {
        let c = ColorComponents::new([1.0f32, 0.5]);
        assert_eq!(c.to_string(), "(1, 0.5)");
    }

    #[test]
    fn test_luminance_white() {
        assert_relative_eq!(luminance_rec709([1.0, 1.0, 1.0]), 1.0, epsilon = 1e-6);
    }
}
