//! Single CSS filter functions.
//!
//! [`FilterOperation`] is one entry of a CSS `filter` list that maps onto a
//! 3x3 color matrix:
//!
//! | CSS                   | variant                       | matrix                        |
//! |-----------------------|-------------------------------|-------------------------------|
//! | `grayscale(<amount>)` | [`FilterOperation::Grayscale`] | [`grayscale_color_matrix`]   |
//! | `sepia(<amount>)`     | [`FilterOperation::Sepia`]     | [`sepia_color_matrix`]       |
//! | `saturate(<amount>)`  | [`FilterOperation::Saturate`]  | [`saturation_color_matrix`]  |
//! | `hue-rotate(<angle>)` | [`FilterOperation::HueRotate`] | [`hue_rotate_color_matrix`]  |
//!
//! Amounts are numbers or percentages and default to `1` when omitted.
//! Angles take `deg`, `rad`, `grad` or `turn` units (a bare `0` is allowed)
//! and default to `0deg`.
//!
//! # Example
//!
//! ```rust
//! use colorfx_ops::FilterOperation;
//!
//! let op: FilterOperation = "sepia(60%)".parse().unwrap();
//! assert_eq!(op, FilterOperation::Sepia { amount: 0.6 });
//!
//! let op: FilterOperation = "hue-rotate(0.5turn)".parse().unwrap();
//! assert_eq!(op, FilterOperation::HueRotate { degrees: 180.0 });
//! assert_eq!(op.to_string(), "hue-rotate(180deg)");
//! ```

use crate::chain::parse_operations;
use crate::{OpsError, OpsResult};
use colorfx_core::ColorComponents;
use colorfx_math::{
    grayscale_color_matrix, hue_rotate_color_matrix, saturation_color_matrix, sepia_color_matrix,
    ColorMatrix, ColorTransform,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One color-matrix filter function.
///
/// Deserializing runs the same argument checks as parsing CSS text, so
/// negative amounts are rejected on both paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", try_from = "RawFilterOperation")]
pub enum FilterOperation {
    /// `grayscale()`: 0 leaves the color alone, 1 is fully gray.
    Grayscale {
        /// Filter strength.
        amount: f32,
    },
    /// `sepia()`: 0 leaves the color alone, 1 is full sepia.
    Sepia {
        /// Filter strength.
        amount: f32,
    },
    /// `saturate()`: 0 is fully desaturated, 1 leaves the color alone.
    Saturate {
        /// Saturation factor.
        amount: f32,
    },
    /// `hue-rotate()`.
    HueRotate {
        /// Rotation angle in degrees.
        degrees: f32,
    },
}

impl FilterOperation {
    /// CSS function name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale { .. } => "grayscale",
            Self::Sepia { .. } => "sepia",
            Self::Saturate { .. } => "saturate",
            Self::HueRotate { .. } => "hue-rotate",
        }
    }

    /// Returns the 3x3 RGB matrix for this operation.
    pub fn color_matrix(&self) -> ColorMatrix<3, 3> {
        match *self {
            Self::Grayscale { amount } => grayscale_color_matrix(amount),
            Self::Sepia { amount } => sepia_color_matrix(amount),
            Self::Saturate { amount } => saturation_color_matrix(amount),
            Self::HueRotate { degrees } => hue_rotate_color_matrix(degrees),
        }
    }

    /// Returns true if the operation leaves every color unchanged.
    ///
    /// Compares the built matrix, so `hue-rotate(360deg)` is not an
    /// identity: its sine term does not round to zero.
    pub fn is_identity(&self) -> bool {
        self.color_matrix() == ColorMatrix::<3, 3>::IDENTITY
    }

    /// Checks the argument range shared by CSS text and deserialized chains.
    fn validate(self) -> OpsResult<Self> {
        match self {
            Self::Grayscale { amount } | Self::Sepia { amount } | Self::Saturate { amount } => {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(OpsError::InvalidArgument(format!(
                        "{}() needs a non-negative amount: {amount}",
                        self.name()
                    )));
                }
            }
            Self::HueRotate { degrees } => {
                if !degrees.is_finite() {
                    return Err(OpsError::InvalidArgument(format!(
                        "hue-rotate() angle is not finite: {degrees}"
                    )));
                }
            }
        }
        Ok(self)
    }

    /// Builds an operation from a function name and its raw argument text.
    ///
    /// Names are ASCII case-insensitive. An empty argument selects the
    /// default value.
    pub fn from_function(name: &str, argument: &str) -> OpsResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(OpsError::Syntax("missing filter function name".into()));
        }
        let argument = Some(argument.trim()).filter(|a| !a.is_empty());

        let operation = match name.to_ascii_lowercase().as_str() {
            "grayscale" => Self::Grayscale { amount: parse_amount(argument)? },
            "sepia" => Self::Sepia { amount: parse_amount(argument)? },
            "saturate" => Self::Saturate { amount: parse_amount(argument)? },
            "hue-rotate" => Self::HueRotate { degrees: parse_angle(argument)? },
            _ => return Err(OpsError::UnknownFilter(name.to_string())),
        };
        operation.validate()
    }
}

/// Wire form of [`FilterOperation`] before argument checks.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum RawFilterOperation {
    Grayscale { amount: f32 },
    Sepia { amount: f32 },
    Saturate { amount: f32 },
    HueRotate { degrees: f32 },
}

impl TryFrom<RawFilterOperation> for FilterOperation {
    type Error = OpsError;

    fn try_from(raw: RawFilterOperation) -> OpsResult<Self> {
        let operation = match raw {
            RawFilterOperation::Grayscale { amount } => Self::Grayscale { amount },
            RawFilterOperation::Sepia { amount } => Self::Sepia { amount },
            RawFilterOperation::Saturate { amount } => Self::Saturate { amount },
            RawFilterOperation::HueRotate { degrees } => Self::HueRotate { degrees },
        };
        operation.validate()
    }
}

/// Parses `<number> | <percentage>`. Range checks happen in `validate`.
fn parse_amount(argument: Option<&str>) -> OpsResult<f32> {
    let Some(text) = argument else {
        return Ok(1.0);
    };
    let (number, divisor) = match text.strip_suffix('%') {
        Some(number) => (number, 100.0),
        None => (text, 1.0),
    };
    Ok(parse_number(number.trim_end(), text)? / divisor)
}

/// Parses `<angle> | <zero>` into degrees.
fn parse_angle(argument: Option<&str>) -> OpsResult<f32> {
    let Some(text) = argument else {
        return Ok(0.0);
    };
    // `grad` before `rad`: both end in "rad".
    let units: [(&str, fn(f32) -> f32); 4] = [
        ("deg", |v| v),
        ("grad", |v| v * 360.0 / 400.0),
        ("rad", f32::to_degrees),
        ("turn", |v| v * 360.0),
    ];
    let lower = text.to_ascii_lowercase();
    for (unit, to_degrees) in units {
        if let Some(number) = lower.strip_suffix(unit) {
            return Ok(to_degrees(parse_number(number, text)?));
        }
    }

    let value = parse_number(text, text)?;
    if value == 0.0 {
        Ok(0.0)
    } else {
        Err(OpsError::InvalidArgument(format!(
            "hue-rotate() angle needs a unit (deg, rad, grad, turn): {text}"
        )))
    }
}

fn parse_number(number: &str, original: &str) -> OpsResult<f32> {
    match number.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(OpsError::InvalidArgument(format!("not a finite number: {original}"))),
    }
}

impl FromStr for FilterOperation {
    type Err = OpsError;

    /// Parses exactly one filter function, e.g. `saturate(150%)`.
    fn from_str(s: &str) -> OpsResult<Self> {
        match parse_operations(s)?.as_slice() {
            [operation] => Ok(*operation),
            _ => Err(OpsError::Syntax(format!("expected a single filter function: {s:?}"))),
        }
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Grayscale { amount } | Self::Sepia { amount } | Self::Saturate { amount } => {
                write!(f, "{}({})", self.name(), amount)
            }
            Self::HueRotate { degrees } => write!(f, "hue-rotate({degrees}deg)"),
        }
    }
}

impl<const N: usize> ColorTransform<N> for FilterOperation {
    fn transform_color_components(&self, input: &ColorComponents<f32, N>) -> ColorComponents<f32, N> {
        self.color_matrix().transformed_color_components(input)
    }
}
