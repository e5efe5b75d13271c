//! WASM bindings for orientation cancelling.
//!
//! This module exposes the two-step cancelling contract to JavaScript. The
//! host asks for the upright size, allocates its own destination buffer
//! (typically `ImageData.data` of a canvas of that size), then has it filled.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const orientation = JsImageOrientation.fromExif(6);
//! const size = cancelled_size(orientation, src.width, src.height);
//! const upright = new Uint8Array(size.byteLength);
//! cancel_orientation(orientation, src.data, src.width, src.height, upright);
//! ```

use upright_core::transform::{
    cancel_orientation as core_cancel, cancelling_transform as core_transform,
    compute_cancelled_size,
};
use upright_core::OrientationError;
use wasm_bindgen::prelude::*;

use crate::orientation::JsImageOrientation;
use crate::types::{dimensions_from_js, to_js_error, JsDimensions};

/// Compute the dimensions of an image after its orientation is cancelled.
///
/// # Errors
///
/// Returns an error if `width` or `height` is zero or negative.
#[wasm_bindgen]
pub fn cancelled_size(
    orientation: &JsImageOrientation,
    width: i32,
    height: i32,
) -> Result<JsDimensions, JsValue> {
    try_cancelled_size(orientation, width, height).map_err(to_js_error)
}

/// Write the upright version of `source` into `destination`.
///
/// `destination` must hold `cancelled_size(...).byteLength` bytes. It is
/// left untouched if any argument is invalid.
///
/// # Errors
///
/// Returns an error for non-positive dimensions or wrongly sized buffers.
#[wasm_bindgen]
pub fn cancel_orientation(
    orientation: &JsImageOrientation,
    source: &[u8],
    width: i32,
    height: i32,
    destination: &mut [u8],
) -> Result<(), JsValue> {
    try_cancel_orientation(orientation, source, width, height, destination).map_err(to_js_error)
}

/// The canvas transform `[a, b, c, d, e, f]` that draws the stored image upright.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const [a, b, c, d, e, f] = cancelling_transform(orientation, img.width, img.height);
/// ctx.setTransform(a, b, c, d, e, f);
/// ctx.drawImage(img, 0, 0);
/// ```
#[wasm_bindgen]
pub fn cancelling_transform(
    orientation: &JsImageOrientation,
    width: i32,
    height: i32,
) -> Result<Vec<f64>, JsValue> {
    try_cancelling_transform(orientation, width, height).map_err(to_js_error)
}

fn try_cancelled_size(
    orientation: &JsImageOrientation,
    width: i32,
    height: i32,
) -> Result<JsDimensions, OrientationError> {
    let (width, height) = dimensions_from_js(width, height)?;
    compute_cancelled_size(orientation.inner(), width, height).map(JsDimensions::from)
}

fn try_cancel_orientation(
    orientation: &JsImageOrientation,
    source: &[u8],
    width: i32,
    height: i32,
    destination: &mut [u8],
) -> Result<(), OrientationError> {
    let (width, height) = dimensions_from_js(width, height)?;
    core_cancel(orientation.inner(), source, width, height, destination)
}

fn try_cancelling_transform(
    orientation: &JsImageOrientation,
    width: i32,
    height: i32,
) -> Result<Vec<f64>, OrientationError> {
    let (width, height) = dimensions_from_js(width, height)?;
    core_transform(orientation.inner(), width, height).map(|t| t.to_array().to_vec())
}
