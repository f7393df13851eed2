//! Input validation for image requests
//!
//! Dimensions and the `square` parameter arrive as raw strings. A value is
//! accepted when it reads as a finite number with an integral value of at
//! least 1, so `"10"` and `"10.0"` are both ten while `""`, `"0"`, `"-1"`,
//! `"1.5"` and `"abc"` are rejected.
//!
//! Checks run in a fixed order so each failure maps to one status code:
//! width/height shape (404), then the size limit (403), then `square` (400).

use crate::errors::ImageRequestError;
use crate::models::SizePair;

/// Parse a positive integer the way the image routes accept them
///
/// Integral values above `u32::MAX` saturate, so oversized input is still
/// reported as too large rather than malformed.
pub fn parse_positive_integer(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 1.0 || value.fract() != 0.0 {
        return None;
    }
    Some(value as u32)
}

/// Parameters that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedImageParams {
    pub size: SizePair,
    pub square: Option<u32>,
}

/// Validate the raw parameters of an `/img/{width}/{height}` request
pub fn validate_image_params(
    width: &str,
    height: &str,
    square: Option<&str>,
    max_dimension: u32,
) -> Result<ValidatedImageParams, ImageRequestError> {
    let parsed_width = parse_positive_integer(width)
        .ok_or_else(|| ImageRequestError::invalid_dimension("width", width))?;
    let parsed_height = parse_positive_integer(height)
        .ok_or_else(|| ImageRequestError::invalid_dimension("height", height))?;

    if parsed_width > max_dimension {
        return Err(ImageRequestError::too_large(
            "width",
            parsed_width,
            max_dimension,
        ));
    }
    if parsed_height > max_dimension {
        return Err(ImageRequestError::too_large(
            "height",
            parsed_height,
            max_dimension,
        ));
    }

    let square = match square {
        Some(raw) => Some(
            parse_positive_integer(raw).ok_or_else(|| ImageRequestError::invalid_square(raw))?,
        ),
        None => None,
    };

    let size = SizePair::new(parsed_width, parsed_height).map_err(|_| {
        ImageRequestError::invalid_dimension("size", format!("{width}x{height}"))
    })?;

    Ok(ValidatedImageParams { size, square })
}
