pub mod api;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{ClientError, OpenF1Client, DEFAULT_BASE_URL};
