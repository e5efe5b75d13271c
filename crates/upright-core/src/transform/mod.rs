//! Orientation cancelling: making a stored image appear upright.
//!
//! # Operations
//!
//! 1. [`compute_cancelled_size`] - dimensions of the upright image
//! 2. [`cancel_orientation`] - remap pixels into a caller-allocated buffer
//! 3. [`cancelling_transform`] - the same remap as an affine transform, for
//!    renderers that draw with a 2D transform instead of copying pixels
//!
//! # Pixel Format
//!
//! - RGBA, 4 bytes per pixel
//! - Row-major, no row padding
//! - Origin is top-left corner

mod affine;
mod cancel;

pub use affine::{cancelling_transform, AffineTransform};
pub use cancel::{cancel_orientation, compute_cancelled_size};
