//! Custom error types for grid extraction

use std::fmt;
use std::io;

/// Errors raised while slicing a grid out of a source image
#[derive(Debug)]
pub enum SliceError {
    /// Source image path does not exist or cannot be opened
    SourceNotFound(String),
    /// Source file is not a decodable raster image
    DecodeError(String),
    /// Output directory creation or file write failure
    WriteError(String),
    /// I/O error
    IoError(io::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::SourceNotFound(path) => write!(f, "Source image not found: {}", path),
            SliceError::DecodeError(msg) => write!(f, "Failed to decode source image: {}", msg),
            SliceError::WriteError(msg) => write!(f, "Write error: {}", msg),
            SliceError::IoError(e) => write!(f, "I/O error: {}", e),
            SliceError::GenericError(msg) => write!(f, "Slice error: {}", msg),
        }
    }
}

impl std::error::Error for SliceError {}

impl From<io::Error> for SliceError {
    fn from(error: io::Error) -> Self {
        SliceError::IoError(error)
    }
}

impl From<String> for SliceError {
    fn from(msg: String) -> Self {
        SliceError::GenericError(msg)
    }
}

/// Result type for grid extraction operations
pub type SliceResult<T> = Result<T, SliceError>;
