//! Utility modules for the imager service

pub mod time;
pub mod validation;

pub use time::now_millis;
pub use validation::{ValidatedImageParams, parse_positive_integer, validate_image_params};
