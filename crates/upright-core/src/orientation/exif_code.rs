//! EXIF Orientation tag values.

use serde::{Deserialize, Serialize};

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
///
/// Each variant names the operation a viewer applies to the stored pixels to
/// display them upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExifOrientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (rotate 90 CW then flip horizontally).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (rotate 270 CW then flip horizontally).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl ExifOrientation {
    /// Strict conversion from a tag value. Returns `None` outside 1-8.
    pub fn from_code(value: u32) -> Option<Self> {
        match value {
            1 => Some(ExifOrientation::Normal),
            2 => Some(ExifOrientation::FlipHorizontal),
            3 => Some(ExifOrientation::Rotate180),
            4 => Some(ExifOrientation::FlipVertical),
            5 => Some(ExifOrientation::Transpose),
            6 => Some(ExifOrientation::Rotate90CW),
            7 => Some(ExifOrientation::Transverse),
            8 => Some(ExifOrientation::Rotate270CW),
            _ => None,
        }
    }

    /// EXIF tag value (1-8).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// All eight orientations in tag order.
    pub const ALL: [ExifOrientation; 8] = [
        ExifOrientation::Normal,
        ExifOrientation::FlipHorizontal,
        ExifOrientation::Rotate180,
        ExifOrientation::FlipVertical,
        ExifOrientation::Transpose,
        ExifOrientation::Rotate90CW,
        ExifOrientation::Transverse,
        ExifOrientation::Rotate270CW,
    ];
}

/// Lenient conversion used when reading files: unknown values are treated as
/// `Normal`.
impl From<u32> for ExifOrientation {
    fn from(value: u32) -> Self {
        ExifOrientation::from_code(value).unwrap_or_default()
    }
}
