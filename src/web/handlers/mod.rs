//! Web handlers module
//!
//! HTTP request handlers organized by domain.

pub mod images;
pub mod stats;
