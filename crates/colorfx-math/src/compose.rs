//! Applying chains of color matrices.
//!
//! A chain is applied left to right: the first matrix sees the input
//! color, each following matrix sees the previous result. Matrices in one
//! chain may have different dimensions; each still has to satisfy
//! `ROWS <= N` for the vector size `N`.
//!
//! Two entry points:
//!
//! - [`apply_matrices_to_color_components`] takes anything implementing
//!   [`ColorTransform`]: a single matrix, a tuple of transforms, an array
//!   or slice of one transform type, or a reference to any of those.
//! - [`apply_matrices!`](crate::apply_matrices) expands to nested
//!   `const fn` calls and so also works in `const` items.
//!
//! ```rust
//! use colorfx_core::ColorComponents;
//! use colorfx_math::{
//!     apply_matrices_to_color_components, grayscale_color_matrix, ColorMatrix,
//! };
//!
//! let offset: ColorMatrix<5, 3> = ColorMatrix::new([
//!     1.0, 0.0, 0.0, 0.0, 0.1,
//!     0.0, 1.0, 0.0, 0.0, 0.1,
//!     0.0, 0.0, 1.0, 0.0, 0.1,
//! ]);
//! let color = ColorComponents::new([0.2, 0.4, 0.6, 1.0]);
//! let out = apply_matrices_to_color_components(&color, (grayscale_color_matrix(1.0), offset));
//! assert_eq!(out[3], 1.0);
//! ```

use crate::ColorMatrix;
use colorfx_core::ColorComponents;

/// A transform from an `N`-component color to a new `N`-component color.
pub trait ColorTransform<const N: usize> {
    /// Returns the transformed color.
    fn transform_color_components(&self, input: &ColorComponents<f32, N>) -> ColorComponents<f32, N>;
}

impl<const COLUMNS: usize, const ROWS: usize, const N: usize> ColorTransform<N>
    for ColorMatrix<COLUMNS, ROWS>
{
    #[inline]
    fn transform_color_components(&self, input: &ColorComponents<f32, N>) -> ColorComponents<f32, N> {
        self.transformed_color_components(input)
    }
}

impl<const N: usize, T: ColorTransform<N> + ?Sized> ColorTransform<N> for &T {
    #[inline]
    fn transform_color_components(&self, input: &ColorComponents<f32, N>) -> ColorComponents<f32, N> {
        (**self).transform_color_components(input)
    }
}

/// An empty slice leaves the color unchanged.
impl<const N: usize, T: ColorTransform<N>> ColorTransform<N> for [T] {
    fn transform_color_components(&self, input: &ColorComponents<f32, N>) -> ColorComponents<f32, N> {
        self.iter()
            .fold(*input, |components, matrix| matrix.transform_color_components(&components))
    }
}

impl<const N: usize, const K: usize, T: ColorTransform<N>> ColorTransform<N> for [T; K] {
    #[inline]
    fn transform_color_components(&self, input: &ColorComponents<f32, N>) -> ColorComponents<f32, N> {
        self.as_slice().transform_color_components(input)
    }
}

macro_rules! impl_color_transform_for_tuple {
    ($($name:ident)+) => {
        impl<const N: usize, $($name: ColorTransform<N>),+> ColorTransform<N> for ($($name,)+) {
            #[allow(non_snake_case)]
            #[inline]
            fn transform_color_components(
                &self,
                input: &ColorComponents<f32, N>,
            ) -> ColorComponents<f32, N> {
                let ($($name,)+) = self;
                let components = *input;
                $(let components = $name.transform_color_components(&components);)+
                components
            }
        }
    };
}

impl_color_transform_for_tuple!(A);
impl_color_transform_for_tuple!(A B);
impl_color_transform_for_tuple!(A B C);
impl_color_transform_for_tuple!(A B C D);
impl_color_transform_for_tuple!(A B C D E);
impl_color_transform_for_tuple!(A B C D E F);
impl_color_transform_for_tuple!(A B C D E F G);
impl_color_transform_for_tuple!(A B C D E F G H);
impl_color_transform_for_tuple!(A B C D E F G H I);
impl_color_transform_for_tuple!(A B C D E F G H I J);
impl_color_transform_for_tuple!(A B C D E F G H I J K);
impl_color_transform_for_tuple!(A B C D E F G H I J K L);

/// Applies `matrices` to `components`, left to right.
///
/// Each stage produces one new `ColorComponents` value; nothing is
/// allocated on the heap.
#[inline]
pub fn apply_matrices_to_color_components<const N: usize, M: ColorTransform<N>>(
    components: &ColorComponents<f32, N>,
    matrices: M,
) -> ColorComponents<f32, N> {
    matrices.transform_color_components(components)
}

/// Applies one or more matrices to a color, left to right.
///
/// Expands to nested [`ColorMatrix::transformed_color_components`] calls,
/// so it can be evaluated at compile time:
///
/// ```rust
/// use colorfx_core::ColorComponents;
/// use colorfx_math::{apply_matrices, sepia_color_matrix, saturation_color_matrix};
///
/// const TONED: ColorComponents<f32> = apply_matrices!(
///     ColorComponents::new([0.5, 0.25, 0.125, 1.0]),
///     saturation_color_matrix(0.0),
///     sepia_color_matrix(1.0),
/// );
/// assert_eq!(TONED[3], 1.0);
/// ```
#[macro_export]
macro_rules! apply_matrices {
    ($components:expr, $matrix:expr $(,)?) => {
        $matrix.transformed_color_components(&$components)
    };
    ($components:expr, $matrix:expr, $($rest:expr),+ $(,)?) => {
        $crate::apply_matrices!($matrix.transformed_color_components(&$components), $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grayscale_color_matrix, hue_rotate_color_matrix, sepia_color_matrix};

    fn color() -> ColorComponents<f32> {
        ColorComponents::new([0.8, 0.3, 0.1, 0.6])
    }

    #[test]
    fn test_single_matrix() {
        let m = sepia_color_matrix(0.5);
        assert_eq!(
            apply_matrices_to_color_components(&color(), m),
            m.transformed_color_components(&color())
        );
    }

    #[test]
    fn test_pair_matches_nested_transforms() {
        let m1 = grayscale_color_matrix(0.3);
        let m2 = hue_rotate_color_matrix(45.0);
        let expected = m2.transformed_color_components(&m1.transformed_color_components(&color()));
        assert_eq!(apply_matrices_to_color_components(&color(), (m1, m2)), expected);
    }

    #[test]
    fn test_order_matters() {
        let scale: ColorMatrix<3, 3> = ColorMatrix::new([2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let offset: ColorMatrix<5, 3> = ColorMatrix::new([
            1.0, 0.0, 0.0, 0.0, 0.5,
            0.0, 1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0, 0.0,
        ]);
        let v = ColorComponents::new([1.0, 0.0, 0.0, 1.0]);
        assert_eq!(apply_matrices_to_color_components(&v, (scale, offset))[0], 2.5);
        assert_eq!(apply_matrices_to_color_components(&v, (offset, scale))[0], 3.0);
    }

    #[test]
    fn test_heterogeneous_dimensions() {
        let swap: ColorMatrix<2, 2> = ColorMatrix::new([0.0, 1.0, 1.0, 0.0]);
        let luma_into_red: ColorMatrix<3, 1> = ColorMatrix::new([0.25, 0.5, 0.25]);
        let alpha_scale = {
            let mut rows = ColorMatrix::<4, 4>::IDENTITY.rows().to_owned();
            rows[3][3] = 0.5;
            ColorMatrix::from_rows(rows)
        };
        let v = ColorComponents::new([1.0, 0.0, 1.0, 1.0]);
        let out = apply_matrices_to_color_components(&v, (swap, luma_into_red, alpha_scale));
        // swap: [0, 1, 1, 1]; luma: [0.75, 1, 1, 1]; alpha: [0.75, 1, 1, 0.5]
        assert_eq!(out.to_array(), [0.75, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_slice_and_array() {
        let chain = [sepia_color_matrix(1.0), grayscale_color_matrix(0.5), sepia_color_matrix(0.2)];
        let expected = apply_matrices_to_color_components(&color(), (chain[0], chain[1], chain[2]));
        assert_eq!(apply_matrices_to_color_components(&color(), chain), expected);
        assert_eq!(apply_matrices_to_color_components(&color(), &chain[..]), expected);
    }

    #[test]
    fn test_empty_slice_is_identity() {
        let chain: &[ColorMatrix<3, 3>] = &[];
        assert_eq!(apply_matrices_to_color_components(&color(), chain), color());
    }

    #[test]
    fn test_macro_matches_function() {
        let m1 = sepia_color_matrix(0.7);
        let m2 = grayscale_color_matrix(0.2);
        let m3 = hue_rotate_color_matrix(120.0);
        assert_eq!(
            apply_matrices!(color(), m1, m2, m3),
            apply_matrices_to_color_components(&color(), (m1, m2, m3))
        );
    }

    #[test]
    fn test_macro_in_const() {
        const OUT: ColorComponents<f32> = apply_matrices!(
            ColorComponents::new([1.0, 1.0, 1.0, 0.25]),
            grayscale_color_matrix(1.0),
            ColorMatrix::<4, 4>::IDENTITY,
        );
        assert_eq!(OUT[3], 0.25);
        assert!((OUT[0] - 1.0).abs() < 1e-6);
    }
}
