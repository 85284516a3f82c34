//! Error types for identicon generation

use thiserror::Error;

/// Result type alias for identicon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering an identicon
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration (the only validated precondition is the cell count)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The raster encoder failed to produce image bytes
    #[error("Image encoding failed: {0}")]
    Encode(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}
