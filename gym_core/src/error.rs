//! Error types for the gym_core library.

use std::io;
use uuid::Uuid;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for gym_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No split template exists for the requested combination
    #[error("No {split_type} template for {days} days per week")]
    SplitNotFound { split_type: String, days: u8 },

    /// Saved plan lookup miss
    #[error("No saved plan with id {0}")]
    EntryNotFound(Uuid),

    /// Input could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
