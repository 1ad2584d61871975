//! Error types for the emoji overlay library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Image decoding or encoding failed
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown glyph mode name
    #[error("Invalid glyph mode: {0} (expected one of vector, cartoon, neon, cyberpunk)")]
    InvalidMode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Detection scenario could not be loaded
    #[error("Scenario error: {0}")]
    ScenarioError(String),
}

/// Application-specific error type (alias for main Error type)
pub type AppError = Error;

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
