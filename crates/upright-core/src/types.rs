//! Core value types: image dimensions and RGBA pixel buffers.

use serde::{Deserialize, Serialize};

use crate::error::OrientationError;

/// Number of bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Width and height of an image in pixels. Both are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting a zero width or height.
    pub fn new(width: u32, height: u32) -> Result<Self, OrientationError> {
        if width == 0 || height == 0 {
            return Err(OrientationError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Dimensions with width and height exchanged.
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Number of pixels.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Length in bytes of an RGBA buffer with these dimensions.
    pub fn rgba_len(self) -> usize {
        self.pixel_count().saturating_mul(BYTES_PER_PIXEL)
    }

    /// Check that `buffer` holds exactly one RGBA sample per pixel.
    pub(crate) fn check_rgba_len(self, buffer: &[u8]) -> Result<(), OrientationError> {
        let expected = self.rgba_len();
        if buffer.len() != expected {
            return Err(OrientationError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(())
    }
}

/// An RGBA image: 4 bytes per pixel, row-major, no row padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data. Length is width * height * 4.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap existing RGBA data, validating its length.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, OrientationError> {
        Dimensions::new(width, height)?.check_rgba_len(&pixels)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A fully transparent black buffer of the given size.
    pub fn zeroed(dimensions: Dimensions) -> Self {
        Self {
            width: dimensions.width,
            height: dimensions.height,
            pixels: vec![0u8; dimensions.rgba_len()],
        }
    }

    /// Create a PixelBuffer from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbaImage.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// RGBA sample at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }
}
