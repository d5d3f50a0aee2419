//! Error types for PPR

use thiserror::Error;

/// Result type alias for PPR operations
pub type Result<T> = std::result::Result<T, PprError>;

/// Main error type for PPR
#[derive(Error, Debug)]
pub enum PprError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column not found: {0}")]
    MissingColumn(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
