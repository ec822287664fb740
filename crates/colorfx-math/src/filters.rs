//! Standard filter-effect color matrices.
//!
//! Each factory returns a 3x3 [`ColorMatrix`] acting on RGB. Coefficients
//! are the equivalents published in Filter Effects Module Level 1:
//!
//! - [`grayscale_color_matrix`] - <https://www.w3.org/TR/filter-effects-1/#grayscaleEquivalent>
//! - [`sepia_color_matrix`] - <https://www.w3.org/TR/filter-effects-1/#sepiaEquivalent>
//! - [`saturation_color_matrix`], [`hue_rotate_color_matrix`] -
//!   <https://www.w3.org/TR/filter-effects-1/#feColorMatrixElement>
//!
//! All but [`hue_rotate_color_matrix`] are `const fn`:
//!
//! ```rust
//! use colorfx_math::{grayscale_color_matrix, ColorMatrix};
//!
//! const FULL_GRAY: ColorMatrix<3, 3> = grayscale_color_matrix(1.0);
//! assert_eq!(FULL_GRAY.at(1, 1), 0.7152);
//! ```

use crate::ColorMatrix;
use colorfx_core::{REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};

/// Grayscale filter. `amount` 1 converts fully to Rec.709 luma, 0 is the
/// identity; values outside [0, 1] are clamped.
pub const fn grayscale_color_matrix(amount: f32) -> ColorMatrix<3, 3> {
    let one_minus_amount = (1.0 - amount).clamp(0.0, 1.0);
    ColorMatrix::new([
        REC709_LUMA_R + 0.7874 * one_minus_amount, REC709_LUMA_G - 0.7152 * one_minus_amount, REC709_LUMA_B - 0.0722 * one_minus_amount,
        REC709_LUMA_R - 0.2126 * one_minus_amount, REC709_LUMA_G + 0.2848 * one_minus_amount, REC709_LUMA_B - 0.0722 * one_minus_amount,
        REC709_LUMA_R - 0.2126 * one_minus_amount, REC709_LUMA_G - 0.7152 * one_minus_amount, REC709_LUMA_B + 0.9278 * one_minus_amount,
    ])
}

/// Sepia filter. `amount` 1 is full sepia tone, 0 is the identity; values
/// outside [0, 1] are clamped.
pub const fn sepia_color_matrix(amount: f32) -> ColorMatrix<3, 3> {
    let one_minus_amount = (1.0 - amount).clamp(0.0, 1.0);
    ColorMatrix::new([
        0.393 + 0.607 * one_minus_amount, 0.769 - 0.769 * one_minus_amount, 0.189 - 0.189 * one_minus_amount,
        0.349 - 0.349 * one_minus_amount, 0.686 + 0.314 * one_minus_amount, 0.168 - 0.168 * one_minus_amount,
        0.272 - 0.272 * one_minus_amount, 0.534 - 0.534 * one_minus_amount, 0.131 + 0.869 * one_minus_amount,
    ])
}

/// Saturation filter (`feColorMatrix type="saturate"`).
///
/// `amount` 0 fully desaturates, 1 is the identity, larger values
/// oversaturate. Not clamped.
pub const fn saturation_color_matrix(amount: f32) -> ColorMatrix<3, 3> {
    ColorMatrix::new([
        0.213 + 0.787 * amount, 0.715 - 0.715 * amount, 0.072 - 0.072 * amount,
        0.213 - 0.213 * amount, 0.715 + 0.285 * amount, 0.072 - 0.072 * amount,
        0.213 - 0.213 * amount, 0.715 - 0.715 * amount, 0.072 + 0.928 * amount,
    ])
}

/// Hue rotation filter (`feColorMatrix type="hueRotate"`).
///
/// Not `const` because `sin`/`cos` cannot be evaluated at compile time.
pub fn hue_rotate_color_matrix(angle_in_degrees: f32) -> ColorMatrix<3, 3> {
    let (sin_hue, cos_hue) = angle_in_degrees.to_radians().sin_cos();
    ColorMatrix::new([
        0.213 + cos_hue * 0.787 - sin_hue * 0.213, 0.715 - cos_hue * 0.715 - sin_hue * 0.715, 0.072 - cos_hue * 0.072 + sin_hue * 0.928,
        0.213 - cos_hue * 0.213 + sin_hue * 0.143, 0.715 + cos_hue * 0.285 + sin_hue * 0.140, 0.072 - cos_hue * 0.072 - sin_hue * 0.283,
        0.213 - cos_hue * 0.213 - sin_hue * 0.787, 0.715 - cos_hue * 0.715 + sin_hue * 0.715, 0.072 + cos_hue * 0.928 + sin_hue * 0.072,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use colorfx_core::ColorComponents;

    fn assert_near(a: ColorMatrix<3, 3>, b: ColorMatrix<3, 3>, epsilon: f32) {
        for row in 0..3 {
            for column in 0..3 {
                assert_abs_diff_eq!(a.at(row, column), b.at(row, column), epsilon = epsilon);
            }
        }
    }

    fn row_sums(m: ColorMatrix<3, 3>) -> [f32; 3] {
        m.rows().map(|r| r.iter().sum())
    }

    const LUMA: ColorMatrix<3, 3> = ColorMatrix::new([
        0.2126, 0.7152, 0.0722,
        0.2126, 0.7152, 0.0722,
        0.2126, 0.7152, 0.0722,
    ]);

    #[test]
    fn test_grayscale_full_is_luma() {
        assert_eq!(grayscale_color_matrix(1.0), LUMA);
    }

    #[test]
    fn test_grayscale_zero_is_identity() {
        assert_near(grayscale_color_matrix(0.0), ColorMatrix::IDENTITY, 1e-6);
    }

    #[test]
    fn test_grayscale_clamps_amount() {
        assert_eq!(grayscale_color_matrix(2.5), grayscale_color_matrix(1.0));
        assert_eq!(grayscale_color_matrix(-3.0), grayscale_color_matrix(0.0));
    }

    #[test]
    fn test_grayscale_preserves_white() {
        for amount in [0.0, 0.25, 0.5, 1.0] {
            for sum in row_sums(grayscale_color_matrix(amount)) {
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_sepia_boundaries() {
        let full: ColorMatrix<3, 3> = ColorMatrix::new([
            0.393, 0.769, 0.189,
            0.349, 0.686, 0.168,
            0.272, 0.534, 0.131,
        ]);
        assert_eq!(sepia_color_matrix(1.0), full);
        assert_near(sepia_color_matrix(0.0), ColorMatrix::IDENTITY, 1e-6);
        assert_eq!(sepia_color_matrix(7.0), full);
    }

    #[test]
    fn test_saturation_boundaries() {
        let desaturated: ColorMatrix<3, 3> = ColorMatrix::new([
            0.213, 0.715, 0.072,
            0.213, 0.715, 0.072,
            0.213, 0.715, 0.072,
        ]);
        assert_eq!(saturation_color_matrix(0.0), desaturated);
        assert_near(saturation_color_matrix(1.0), ColorMatrix::IDENTITY, 1e-6);
    }

    #[test]
    fn test_saturation_not_clamped() {
        let m = saturation_color_matrix(2.0);
        assert_abs_diff_eq!(m.at(0, 0), 0.213 + 0.787 * 2.0, epsilon = 1e-6);
        assert!(m.at(0, 1) < 0.0);
    }

    #[test]
    fn test_hue_rotate_zero_is_identity() {
        assert_near(hue_rotate_color_matrix(0.0), ColorMatrix::IDENTITY, 1e-6);
    }

    #[test]
    fn test_hue_rotate_full_turn() {
        assert_near(hue_rotate_color_matrix(360.0), ColorMatrix::IDENTITY, 1e-5);
    }

    #[test]
    fn test_hue_rotate_keeps_grays() {
        let gray = ColorComponents::new([0.5, 0.5, 0.5, 1.0]);
        for angle in [30.0, 90.0, 180.0, 270.0] {
            let out = hue_rotate_color_matrix(angle).transformed_color_components(&gray);
            for i in 0..3 {
                assert_abs_diff_eq!(out[i], 0.5, epsilon = 1e-5);
            }
            assert_eq!(out[3], 1.0);
        }
    }

    #[test]
    fn test_factories_are_const() {
        const GRAY: ColorMatrix<3, 3> = grayscale_color_matrix(1.0);
        const SEPIA: ColorMatrix<3, 3> = sepia_color_matrix(1.0);
        const SATURATE: ColorMatrix<3, 3> = saturation_color_matrix(0.0);
        assert_eq!(GRAY, LUMA);
        assert_eq!(SEPIA.at(2, 2), 0.131);
        assert_eq!(SATURATE.at(0, 0), 0.213);
    }
}
