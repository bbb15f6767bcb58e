// Library interface for fittrack modules
// This allows integration tests to access the core functionality

pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod training;

// Re-export commonly used types for convenience
pub use batch::{process_package, run_batch, sample_packages};
pub use config::AppConfig;
pub use error::{ErrorSeverity, Result, TrackerError};
pub use export::OutputFormat;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{InfoMessage, SensorPackage, WorkoutCode};
pub use training::{read_package, Running, SportsWalking, Swimming, Training, Workout};
