//! Error types for orientation operations.

use thiserror::Error;

/// Errors raised by orientation descriptors and the cancelling transform.
///
/// Every variant except [`OrientationError::Decode`] is an invalid-argument
/// error: it is raised at the call boundary before any output is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrientationError {
    /// Width or height is zero.
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A pixel buffer does not hold exactly `width * height * 4` bytes.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The four descriptor entries do not form a signed permutation matrix.
    #[error("Invalid orientation descriptor: ({a}, {b}, {c}, {d})")]
    InvalidDescriptor { a: i32, b: i32, c: i32, d: i32 },

    /// EXIF orientation code outside 1-8.
    #[error("Unknown EXIF orientation: {0}")]
    UnknownExifOrientation(u32),

    /// The encoded image could not be decoded.
    #[error("Failed to decode image: {0}")]
    Decode(String),
}

impl OrientationError {
    /// Returns true if the error was caused by a bad argument from the caller.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, OrientationError::Decode(_))
    }
}
