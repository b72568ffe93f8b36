pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::{Config, LogLevel};
pub use error::{AppError, AppResult, DataSourceError};
