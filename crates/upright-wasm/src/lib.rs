//! Upright WASM - WebAssembly bindings for Upright
//!
//! This crate provides WASM bindings to expose the upright-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `orientation` - Orientation descriptors (EXIF tags, flags, matrices)
//! - `transform` - Cancelled size, pixel remapping and canvas transform
//! - `decode` - Decoding encoded images straight to upright pixels
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImageOrientation, cancelled_size, cancel_orientation } from '@upright/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const orientation = JsImageOrientation.fromExif(exifCode);
//! const size = cancelled_size(orientation, width, height);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod logging;
mod orientation;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_upright, read_exif_orientation};
pub use orientation::JsImageOrientation;
pub use transform::{cancel_orientation, cancelled_size, cancelling_transform};
pub use types::{JsDimensions, JsPixelBuffer};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init_logging();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
