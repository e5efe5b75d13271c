//! Decoding encoded images straight to upright RGBA pixels.
//!
//! This is the host side of the two-step cancelling contract: it owns the
//! destination allocation, sized by [`compute_cancelled_size`], and hands it
//! to [`cancel_orientation`].

use std::io::Cursor;

use image::ImageReader;
use log::debug;

use crate::error::OrientationError;
use crate::metadata::read_orientation;
use crate::orientation::ImageOrientation;
use crate::transform::{cancel_orientation, compute_cancelled_size};
use crate::types::PixelBuffer;

/// Decode an image from bytes and cancel its EXIF orientation.
///
/// # Arguments
///
/// * `bytes` - Encoded image bytes (JPEG or PNG)
///
/// # Returns
///
/// A `PixelBuffer` with RGBA pixel data in upright orientation.
///
/// # Errors
///
/// Returns `OrientationError::Decode` if the bytes cannot be decoded.
pub fn decode_upright(bytes: &[u8]) -> Result<PixelBuffer, OrientationError> {
    let exif = read_orientation(bytes);
    let orientation = ImageOrientation::from(exif);

    let source = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| OrientationError::Decode(e.to_string()))?
        .decode()
        .map_err(|e| OrientationError::Decode(e.to_string()))?
        .into_rgba8();

    let (width, height) = source.dimensions();
    debug!("Decoded {}x{} image with orientation {:?}", width, height, exif);

    let size = compute_cancelled_size(&orientation, width, height)?;
    let mut upright = PixelBuffer::zeroed(size);
    cancel_orientation(
        &orientation,
        source.as_raw(),
        width,
        height,
        &mut upright.pixels,
    )?;

    Ok(upright)
}
