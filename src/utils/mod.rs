//! Utility functions and helpers
//!
//! Application directories and logging setup.

pub mod app_paths;
pub mod logging;
