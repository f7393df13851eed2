//! Configuration default values
//!
//! This module contains all the default values for configuration options,
//! making them easily changeable in one central location.
// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "./public";

// Imaging defaults
pub const DEFAULT_MAX_DIMENSION: u32 = 2000;

// Stats defaults
pub const DEFAULT_TOP_LIMIT: usize = 10;
pub const DEFAULT_HIT_WINDOWS: [&str; 3] = ["5s", "10s", "15s"];

// Environment
pub const PORT_ENV_VAR: &str = "PORT";
