pub mod config;
pub mod errors;
pub mod models;
pub mod renderer;
pub mod stats;
pub mod utils;
pub mod web;
