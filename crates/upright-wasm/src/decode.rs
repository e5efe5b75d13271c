//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_upright`] - Decode JPEG/PNG bytes to upright RGBA pixels
//! - [`read_exif_orientation`] - Read the EXIF orientation tag (1-8)
//!
//! # Example
//!
//! ```typescript
//! import { decode_upright } from '@upright/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_upright(bytes);
//! const data = new ImageData(new Uint8ClampedArray(image.pixels()), image.width);
//! ```

use upright_core::{decode, metadata};
use wasm_bindgen::prelude::*;

use crate::types::{to_js_error, JsPixelBuffer};

/// Decode an image and cancel its EXIF orientation.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable JPEG or PNG.
#[wasm_bindgen]
pub fn decode_upright(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    decode::decode_upright(bytes)
        .map(JsPixelBuffer::from)
        .map_err(to_js_error)
}

/// Read the EXIF orientation tag value (1-8).
///
/// Returns 1 (normal) when the bytes carry no usable orientation.
#[wasm_bindgen]
pub fn read_exif_orientation(bytes: &[u8]) -> u8 {
    metadata::read_orientation(bytes).code()
}
