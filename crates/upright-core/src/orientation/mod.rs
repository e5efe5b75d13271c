//! Orientation descriptors.
//!
//! An [`ImageOrientation`] records how an image's stored pixels are rotated
//! or mirrored relative to the upright scene. [`ExifOrientation`] is the
//! EXIF tag view of the same eight cases.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - "Clockwise" is clockwise as seen on screen

mod descriptor;
mod exif_code;

pub use descriptor::ImageOrientation;
pub use exif_code::ExifOrientation;
