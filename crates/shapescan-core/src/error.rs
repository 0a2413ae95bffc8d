//! Error types shared by every core operation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the raster transforms, raster acquisition, and detection.
///
/// Degenerate detection input (an empty raster, an all-background mask, a
/// component below the noise threshold) is not an error; it yields a
/// `DetectionResult` with shape `none`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The raster file does not exist.
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The bytes are not a recognised or decodable image.
    #[error("Invalid or unsupported image format: {0}")]
    InvalidFormat(String),

    /// I/O error while reading a raster.
    #[error("I/O error: {0}")]
    Io(String),

    /// A caller-supplied parameter is out of its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Pixel buffer length does not match `width * height * channels`.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn invalid_parameter(msg: impl Into<String>) -> Self {
        Error::InvalidParameter(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
