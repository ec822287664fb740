//! Error types for filter operations.

use thiserror::Error;

/// Error type for filter operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Filter function name is not one of the supported filters.
    #[error("unknown filter function: {0}")]
    UnknownFilter(String),

    /// Filter function argument could not be used.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Filter text is not a sequence of `name(argument)` functions.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Pixel buffer does not match the requested channel layout.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Error from colorfx-core.
    #[error(transparent)]
    Core(#[from] colorfx_core::Error),
}

/// Result type for filter operations.
pub type OpsResult<T> = Result<T, OpsError>;
