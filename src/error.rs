//! AHA error types
//!
//! The engine itself never fails; these errors come from its boundaries
//! (configuration, chamber persistence, the narrative generator's replies).

use thiserror::Error;

/// AHA error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chamber storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid reply from the narrative generator
    #[error("Agent error: {0}")]
    Agent(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for AHA operations
pub type Result<T> = std::result::Result<T, Error>;
