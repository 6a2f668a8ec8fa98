pub mod aggregator;
pub mod config;
pub mod export;
pub mod models;
pub mod normalizer;
pub mod price;
pub mod report;
pub mod runner;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use config::AppConfig;
pub use utils::error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;
