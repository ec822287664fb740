//! Fixed-size color matrix type.
//!
//! [`ColorMatrix`] maps a [`ColorComponents`] vector to a new vector. Both
//! dimensions are const generic parameters (columns first, rows second), so
//! every loop bound and size relationship is known at compile time.
//!
//! # Convention
//!
//! Coefficients are stored in **row-major** order and act on **column
//! vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | r |   | m00*r + m01*g + m02*b |
//! | m10 m11 m12 | * | g | = | m10*r + m11*g + m12*b |
//! | m20 m21 m22 |   | b |   | m20*r + m21*g + m22*b |
//! ```
//!
//! # Size mismatches
//!
//! A matrix with `R` rows and `C` columns applied to a vector of size `S`:
//!
//! - `R > S` is rejected at compile time.
//! - `C <= S`: only the first `C` components are read.
//! - `C > S`: each extra column is added as a constant offset, as if the
//!   vector were extended with 1s.
//! - `S > R`: components `R..S` are copied through unchanged.
//!
//! So a 3x3 matrix leaves alpha alone, and a 5-column matrix on an RGBA
//! vector carries a per-row offset in its last column.
//!
//! ```rust
//! use colorfx_core::ColorComponents;
//! use colorfx_math::ColorMatrix;
//!
//! // Swap red and blue.
//! let swap: ColorMatrix<3, 3> = ColorMatrix::new([
//!     0.0, 0.0, 1.0,
//!     0.0, 1.0, 0.0,
//!     1.0, 0.0, 0.0,
//! ]);
//! let rgba = ColorComponents::new([1.0, 0.5, 0.25, 0.75]);
//! let out = swap.transformed_color_components(&rgba);
//! assert_eq!(out.to_array(), [0.25, 0.5, 1.0, 0.75]);
//! ```

use colorfx_core::ColorComponents;

/// A color matrix with `COLUMNS` columns and `ROWS` rows.
///
/// Immutable once built. Equality compares every coefficient exactly and
/// is only defined between matrices of the same dimensions.
///
/// # Example
///
/// ```rust
/// use colorfx_core::ColorComponents;
/// use colorfx_math::ColorMatrix;
///
/// let v = ColorComponents::new([1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(ColorMatrix::<3, 3>::IDENTITY.transformed_color_components(&v), v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct ColorMatrix<const COLUMNS: usize, const ROWS: usize> {
    m: [[f32; COLUMNS]; ROWS],
}

impl<const COLUMNS: usize, const ROWS: usize> ColorMatrix<COLUMNS, ROWS> {
    /// Number of columns.
    pub const COLUMN_COUNT: usize = COLUMNS;

    /// Number of rows.
    pub const ROW_COUNT: usize = ROWS;

    /// Creates a matrix from `COLUMNS * ROWS` coefficients in row-major order.
    ///
    /// Any other coefficient count is a compile error:
    ///
    /// ```compile_fail
    /// use colorfx_math::ColorMatrix;
    ///
    /// let m: ColorMatrix<3, 3> = ColorMatrix::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    /// # let _ = m;
    /// ```
    #[inline]
    pub const fn new<const LEN: usize>(coefficients: [f32; LEN]) -> Self {
        const { assert!(LEN == COLUMNS * ROWS, "coefficient count must equal COLUMNS * ROWS") };

        let mut m = [[0.0; COLUMNS]; ROWS];
        let mut row = 0;
        while row < ROWS {
            let mut column = 0;
            while column < COLUMNS {
                m[row][column] = coefficients[row * COLUMNS + column];
                column += 1;
            }
            row += 1;
        }
        Self { m }
    }

    /// Creates a matrix from row arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorfx_math::ColorMatrix;
    ///
    /// let a = ColorMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// let b: ColorMatrix<2, 2> = ColorMatrix::new([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(a, b);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[f32; COLUMNS]; ROWS]) -> Self {
        Self { m: rows }
    }

    /// Returns the coefficient at `row`, `column`.
    ///
    /// Indices must satisfy `row < ROWS` and `column < COLUMNS`.
    #[inline]
    pub const fn at(&self, row: usize, column: usize) -> f32 {
        debug_assert!(row < ROWS && column < COLUMNS, "color matrix index out of range");
        self.m[row][column]
    }

    /// Returns the coefficients as row arrays.
    #[inline]
    pub const fn rows(&self) -> &[[f32; COLUMNS]; ROWS] {
        &self.m
    }

    /// Applies this matrix to a color vector of `N` components.
    ///
    /// `ROWS <= N` is checked at compile time:
    ///
    /// ```compile_fail
    /// use colorfx_core::ColorComponents;
    /// use colorfx_math::ColorMatrix;
    ///
    /// let m = ColorMatrix::<3, 3>::IDENTITY;
    /// let rg = ColorComponents::new([1.0, 0.5]);
    /// let _ = m.transformed_color_components(&rg);
    /// ```
    ///
    /// Columns past `N` add their coefficient as a constant term and
    /// components past `ROWS` pass through (see the module docs).
    pub const fn transformed_color_components<const N: usize>(
        &self,
        input: &ColorComponents<f32, N>,
    ) -> ColorComponents<f32, N> {
        const { assert!(N >= ROWS, "color matrix has more rows than the color has components") };

        let input = &input.components;
        let mut result = [0.0; N];

        let mut row = 0;
        while row < ROWS {
            if COLUMNS <= N {
                let mut column = 0;
                while column < COLUMNS {
                    result[row] += self.m[row][column] * input[column];
                    column += 1;
                }
            } else {
                let mut column = 0;
                while column < N {
                    result[row] += self.m[row][column] * input[column];
                    column += 1;
                }
                let mut additional_column = N;
                while additional_column < COLUMNS {
                    result[row] += self.m[row][additional_column];
                    additional_column += 1;
                }
            }
            row += 1;
        }

        let mut additional_row = ROWS;
        while additional_row < N {
            result[additional_row] = input[additional_row];
            additional_row += 1;
        }

        ColorComponents::new(result)
    }

    /// Returns true if all coefficients are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }
}

impl<const N: usize> ColorMatrix<N, N> {
    /// Identity matrix.
    pub const IDENTITY: Self = {
        let mut m = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            m[i][i] = 1.0;
            i += 1;
        }
        Self { m }
    };
}

impl<const N: usize> Default for ColorMatrix<N, N> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ColorMatrix<3, 3> {
    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        let m = &self.m;
        glam::Mat3::from_cols_array_2d(&[
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_rows([
            [cols[0][0], cols[1][0], cols[2][0]],
            [cols[0][1], cols[1][1], cols[2][1]],
            [cols[0][2], cols[1][2], cols[2][2]],
        ])
    }
}

impl From<ColorMatrix<3, 3>> for glam::Mat3 {
    #[inline]
    fn from(m: ColorMatrix<3, 3>) -> Self {
        m.to_glam()
    }
}

impl From<glam::Mat3> for ColorMatrix<3, 3> {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_glam(m)
    }
}
