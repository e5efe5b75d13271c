//! Upright Core - EXIF orientation cancelling
//!
//! This crate computes how a stored image must be rotated or mirrored to
//! appear upright, and remaps RGBA pixel buffers accordingly.
//!
//! # Usage
//!
//! Cancelling is a two-step contract that leaves buffer allocation with the
//! caller:
//!
//! ```
//! use upright_core::{cancel_orientation, compute_cancelled_size, ImageOrientation};
//!
//! let orientation = ImageOrientation::from_exif(6).unwrap();
//! let source = vec![0u8; 4 * 2 * 4];
//!
//! let size = compute_cancelled_size(&orientation, 4, 2).unwrap();
//! let mut upright = vec![0u8; size.rgba_len()];
//! cancel_orientation(&orientation, &source, 4, 2, &mut upright).unwrap();
//! assert_eq!((size.width, size.height), (2, 4));
//! ```

pub mod decode;
pub mod error;
pub mod metadata;
pub mod orientation;
pub mod transform;
pub mod types;

pub use decode::decode_upright;
pub use error::OrientationError;
pub use metadata::read_orientation;
pub use orientation::{ExifOrientation, ImageOrientation};
pub use transform::{
    cancel_orientation, cancelling_transform, compute_cancelled_size, AffineTransform,
};
pub use types::{Dimensions, PixelBuffer, BYTES_PER_PIXEL};
