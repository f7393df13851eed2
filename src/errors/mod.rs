//! Centralized error handling for the imager service
//!
//! Errors are split by layer so that each one maps onto a single HTTP
//! outcome at the web boundary:
//!
//! - **Image request errors**: rejected width/height/square parameters
//! - **Stats errors**: values the analytics store refuses to hold
//! - **Application errors**: rendering, configuration and internal failures
//!
//! # Usage
//!
//! ```rust
//! use imager::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Ok("success".to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for stats store Results
pub type StatsResult<T> = Result<T, StatsError>;
