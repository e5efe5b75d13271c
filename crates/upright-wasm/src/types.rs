//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Upright types,
//! handling the conversion between Rust and JavaScript data representations.

use upright_core::{Dimensions, OrientationError, PixelBuffer};
use wasm_bindgen::prelude::*;

/// Image dimensions for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsDimensions {
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsDimensions {
    /// Get the width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in an RGBA buffer of this size
    #[wasm_bindgen(getter, js_name = byteLength)]
    pub fn byte_length(&self) -> usize {
        Dimensions {
            width: self.width,
            height: self.height,
        }
        .rgba_len()
    }
}

impl From<Dimensions> for JsDimensions {
    fn from(dims: Dimensions) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
        }
    }
}

/// An upright RGBA image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`, ready for `new ImageData(...)`.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter, js_name = byteLength)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl From<PixelBuffer> for JsPixelBuffer {
    fn from(buf: PixelBuffer) -> Self {
        Self {
            width: buf.width,
            height: buf.height,
            pixels: buf.pixels,
        }
    }
}

/// Convert a JavaScript number to a pixel dimension.
///
/// JS callers may pass zero or negative numbers; both are rejected with the
/// same error the core raises for a zero dimension.
pub(crate) fn dimensions_from_js(width: i32, height: i32) -> Result<(u32, u32), OrientationError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(OrientationError::InvalidDimensions {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }),
    }
}

/// Convert a core error into a JavaScript error value.
pub(crate) fn to_js_error(err: OrientationError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
