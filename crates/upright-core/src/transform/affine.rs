//! Affine form of the cancelling transform, for canvas-style renderers.
//!
//! A renderer that draws with a 2D transform (such as an HTML canvas
//! context) can cancel an orientation without touching pixels by setting
//! this transform before drawing the stored image at the origin.

use serde::{Deserialize, Serialize};

use crate::error::OrientationError;
use crate::orientation::ImageOrientation;
use crate::types::Dimensions;

/// A 2D affine transform `(a, b, c, d, e, f)` mapping `(x, y)` to
/// `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineTransform {
    /// Map a point through the transform.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Coefficients in canvas `setTransform` order.
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

/// Compute the transform that draws a `width` x `height` stored image upright.
///
/// The linear part is the inverse of the descriptor. The translation moves
/// the result back into the positive quadrant, so the drawn image exactly
/// covers a canvas of [`compute_cancelled_size`](super::compute_cancelled_size).
///
/// # Errors
///
/// Returns `OrientationError::InvalidDimensions` if `width` or `height` is zero.
pub fn cancelling_transform(
    orientation: &ImageOrientation,
    width: u32,
    height: u32,
) -> Result<AffineTransform, OrientationError> {
    Dimensions::new(width, height)?;
    let inverse = orientation.inverse();

    let (w, h) = (width as f64, height as f64);
    let (a, b, c, d) = (
        inverse.a() as f64,
        inverse.b() as f64,
        inverse.c() as f64,
        inverse.d() as f64,
    );

    // Where the far corner lands; a negative coordinate needs a shift back
    let projected_x = a * w + c * h;
    let projected_y = b * w + d * h;

    Ok(AffineTransform {
        a,
        b,
        c,
        d,
        e: (-projected_x).max(0.0),
        f: (-projected_y).max(0.0),
    })
}
