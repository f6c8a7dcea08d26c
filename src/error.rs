//! Unified error type for tshop-mock.

use thiserror::Error;

/// Errors that can occur while starting the server or rendering designs.
#[derive(Debug, Error)]
pub enum MockError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A font file could not be loaded.
    #[error("Font error: {0}")]
    Font(String),

    /// A style color could not be parsed.
    #[error("Invalid color '{0}'")]
    Color(String),

    /// The style catalog has nothing to pick from.
    #[error("Style catalog is empty")]
    EmptyCatalog,

    /// PNG encoding failed.
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}
