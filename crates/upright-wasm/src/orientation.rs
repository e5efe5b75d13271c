//! Orientation descriptor WASM bindings.
//!
//! This module exposes `ImageOrientation` to JavaScript so a host can build
//! descriptors from EXIF tags, flags or raw matrix entries and pass them to
//! the transform bindings.

use upright_core::{ExifOrientation, ImageOrientation, OrientationError};
use wasm_bindgen::prelude::*;

use crate::types::to_js_error;

/// Orientation descriptor wrapper for JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsImageOrientation {
    inner: ImageOrientation,
}

#[wasm_bindgen]
impl JsImageOrientation {
    /// Create a descriptor from its four matrix entries.
    ///
    /// # Errors
    /// Returns error unless the entries form a signed permutation matrix
    #[wasm_bindgen(constructor)]
    pub fn new(a: i32, b: i32, c: i32, d: i32) -> Result<JsImageOrientation, JsValue> {
        Self::try_new(a, b, c, d).map_err(to_js_error)
    }

    /// Create a descriptor from an EXIF orientation tag value (1-8).
    #[wasm_bindgen(js_name = fromExif)]
    pub fn from_exif(code: u32) -> Result<JsImageOrientation, JsValue> {
        Self::try_from_exif(code).map_err(to_js_error)
    }

    /// Create a descriptor from the flags of its cancelling remap.
    #[wasm_bindgen(js_name = fromFlags)]
    pub fn from_flags(swap_xy: bool, flip_x: bool, flip_y: bool) -> JsImageOrientation {
        ImageOrientation::from_flags(swap_xy, flip_x, flip_y).into()
    }

    /// Create a descriptor for pixels rotated clockwise by quarter turns,
    /// optionally mirrored first.
    #[wasm_bindgen(js_name = fromRotation)]
    pub fn from_rotation(
        quarter_turns: i32,
        mirror_x: bool,
        mirror_y: bool,
    ) -> JsImageOrientation {
        ImageOrientation::from_rotation_and_mirror(quarter_turns, mirror_x, mirror_y).into()
    }

    /// The upright orientation.
    pub fn identity() -> JsImageOrientation {
        ImageOrientation::IDENTITY.into()
    }

    /// The descriptor that undoes this one.
    pub fn inverse(&self) -> JsImageOrientation {
        self.inner.inverse().into()
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> i32 {
        self.inner.a()
    }

    #[wasm_bindgen(getter)]
    pub fn b(&self) -> i32 {
        self.inner.b()
    }

    #[wasm_bindgen(getter)]
    pub fn c(&self) -> i32 {
        self.inner.c()
    }

    #[wasm_bindgen(getter)]
    pub fn d(&self) -> i32 {
        self.inner.d()
    }

    /// Whether cancelling swaps width and height
    #[wasm_bindgen(getter, js_name = swapsAxes)]
    pub fn swaps_axes(&self) -> bool {
        self.inner.swaps_axes()
    }

    #[wasm_bindgen(getter, js_name = flipsX)]
    pub fn flips_x(&self) -> bool {
        self.inner.flips_x()
    }

    #[wasm_bindgen(getter, js_name = flipsY)]
    pub fn flips_y(&self) -> bool {
        self.inner.flips_y()
    }

    /// EXIF tag value (1-8) for this descriptor
    #[wasm_bindgen(getter, js_name = exifCode)]
    pub fn exif_code(&self) -> u8 {
        self.inner.to_exif().code()
    }

    #[wasm_bindgen(js_name = isIdentity)]
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    #[wasm_bindgen(js_name = isEqual)]
    pub fn is_equal(&self, other: &JsImageOrientation) -> bool {
        self.inner == other.inner
    }

    /// Serialize to a `[a, b, c, d]` array for storage
    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a `[a, b, c, d]` array or an `{a, b, c, d}` object
    ///
    /// # Errors
    /// Returns error if the value has neither shape or the entries do not
    /// form a signed permutation matrix
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(value: JsValue) -> Result<JsImageOrientation, JsValue> {
        let entries: OrientationJs = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid orientation: {}", e)))?;
        let [a, b, c, d] = entries.into_array();
        Self::try_new(a, b, c, d).map_err(to_js_error)
    }
}

/// Helper for deserializing either form a JS host may store a descriptor in.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OrientationJs {
    Array([i32; 4]),
    Fields { a: i32, b: i32, c: i32, d: i32 },
}

impl OrientationJs {
    fn into_array(self) -> [i32; 4] {
        match self {
            OrientationJs::Array(entries) => entries,
            OrientationJs::Fields { a, b, c, d } => [a, b, c, d],
        }
    }
}

impl JsImageOrientation {
    pub(crate) fn try_new(a: i32, b: i32, c: i32, d: i32) -> Result<Self, OrientationError> {
        ImageOrientation::new(a, b, c, d).map(Self::from)
    }

    pub(crate) fn try_from_exif(code: u32) -> Result<Self, OrientationError> {
        ImageOrientation::from_exif(code).map(Self::from)
    }

    /// Get a reference to the inner descriptor for use in the transform bindings
    pub(crate) fn inner(&self) -> &ImageOrientation {
        &self.inner
    }
}

impl From<ImageOrientation> for JsImageOrientation {
    fn from(inner: ImageOrientation) -> Self {
        Self { inner }
    }
}

impl From<ExifOrientation> for JsImageOrientation {
    fn from(exif: ExifOrientation) -> Self {
        ImageOrientation::from(exif).into()
    }
}
