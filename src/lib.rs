pub mod analytics;
pub mod app;
pub mod cli;
pub mod datasets;
pub mod error;
pub mod ui;
pub mod utils;

pub use error::{AppError, Result};
