//! Error type definitions for the imager service

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected image request parameters
    #[error("Image request error: {0}")]
    ImageRequest(#[from] ImageRequestError),

    /// The image renderer failed to produce an image
    #[error("Render error: {message}")]
    Render { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Validation failures for `/img/{width}/{height}` requests
///
/// All of these are raised before the renderer runs and before any stats
/// are recorded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageRequestError {
    /// Width or height is not a positive integer
    #[error("Invalid dimension: {field} = '{value}'")]
    InvalidDimension { field: String, value: String },

    /// Width or height exceeds the configured maximum
    #[error("Dimension too large: {field} = {value} (max: {max})")]
    DimensionTooLarge { field: String, value: u32, max: u32 },

    /// The square query parameter is not a positive integer
    #[error("Invalid square value: '{value}'")]
    InvalidSquareValue { value: String },
}

/// Stats store specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A size with a zero component
    #[error("Invalid size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

impl AppError {
    /// Create a render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl ImageRequestError {
    /// Create an invalid dimension error
    pub fn invalid_dimension<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Self::InvalidDimension {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a dimension too large error
    pub fn too_large<F: Into<String>>(field: F, value: u32, max: u32) -> Self {
        Self::DimensionTooLarge {
            field: field.into(),
            value,
            max,
        }
    }

    /// Create an invalid square error
    pub fn invalid_square<V: Into<String>>(value: V) -> Self {
        Self::InvalidSquareValue {
            value: value.into(),
        }
    }
}
