//! Orientation descriptor: a signed permutation matrix.

use serde::{Deserialize, Serialize};

use super::ExifOrientation;
use crate::error::OrientationError;

/// How the stored pixels of an image relate to the upright scene.
///
/// The descriptor is a 2x2 matrix `(a, b, c, d)` in canvas-transform
/// convention: it maps a point `(x, y)` of the upright scene to
/// `(a*x + c*y, b*x + d*y)` in the stored image. Cancelling the orientation
/// applies the inverse matrix.
///
/// Only signed permutation matrices are valid, which gives exactly eight
/// descriptors. Each one is equivalent to three flags describing the
/// cancelling remap, applied in order: swap axes, flip x, flip y.
///
/// | EXIF | descriptor      | swap | flip x | flip y |
/// |------|-----------------|------|--------|--------|
/// | 1    | ( 1,  0,  0,  1) |      |        |        |
/// | 2    | (-1,  0,  0,  1) |      | x      |        |
/// | 3    | (-1,  0,  0, -1) |      | x      | x      |
/// | 4    | ( 1,  0,  0, -1) |      |        | x      |
/// | 5    | ( 0,  1,  1,  0) | x    |        |        |
/// | 6    | ( 0, -1,  1,  0) | x    | x      |        |
/// | 7    | ( 0, -1, -1,  0) | x    | x      | x      |
/// | 8    | ( 0,  1, -1,  0) | x    |        | x      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i32; 4]", into = "[i32; 4]")]
pub struct ImageOrientation {
    a: i32,
    b: i32,
    c: i32,
    d: i32,
}

impl Default for ImageOrientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ImageOrientation {
    /// The upright orientation.
    pub const IDENTITY: ImageOrientation = ImageOrientation {
        a: 1,
        b: 0,
        c: 0,
        d: 1,
    };

    /// Create a descriptor from its four matrix entries.
    ///
    /// # Errors
    ///
    /// Returns `OrientationError::InvalidDescriptor` unless the entries form a
    /// signed permutation matrix (each entry -1, 0 or 1, one non-zero entry
    /// per row and column).
    pub fn new(a: i32, b: i32, c: i32, d: i32) -> Result<Self, OrientationError> {
        let unit = |v: i32| v == 1 || v == -1;
        let straight = unit(a) && unit(d) && b == 0 && c == 0;
        let swapped = unit(b) && unit(c) && a == 0 && d == 0;
        if straight || swapped {
            Ok(Self { a, b, c, d })
        } else {
            Err(OrientationError::InvalidDescriptor { a, b, c, d })
        }
    }

    /// Create a descriptor from the flags of its cancelling remap.
    ///
    /// Cancelling maps a source pixel `(x, y)` by first swapping the axes if
    /// `swap_xy` is set, then mirroring x if `flip_x`, then mirroring y if
    /// `flip_y`.
    pub fn from_flags(swap_xy: bool, flip_x: bool, flip_y: bool) -> Self {
        let sx = if flip_x { -1 } else { 1 };
        let sy = if flip_y { -1 } else { 1 };
        if swap_xy {
            Self {
                a: 0,
                b: sx,
                c: sy,
                d: 0,
            }
        } else {
            Self {
                a: sx,
                b: 0,
                c: 0,
                d: sy,
            }
        }
    }

    /// Create a descriptor from an EXIF orientation tag value.
    ///
    /// # Errors
    ///
    /// Returns `OrientationError::UnknownExifOrientation` for values outside 1-8.
    pub fn from_exif(code: u32) -> Result<Self, OrientationError> {
        ExifOrientation::from_code(code)
            .map(Self::from)
            .ok_or(OrientationError::UnknownExifOrientation(code))
    }

    /// Descriptor for stored pixels that are the upright scene rotated
    /// clockwise by `quarter_turns` quarter turns. Any integer is accepted.
    pub fn from_rotation(quarter_turns: i32) -> Self {
        Self::from_rotation_and_mirror(quarter_turns, false, false)
    }

    /// Descriptor for stored pixels that are the upright scene, mirrored
    /// along x and/or y, then rotated clockwise by `quarter_turns`.
    pub fn from_rotation_and_mirror(quarter_turns: i32, mirror_x: bool, mirror_y: bool) -> Self {
        // Clockwise quarter turn in y-down coordinates: (x, y) -> (-y, x).
        const CLOCKWISE: ImageOrientation = ImageOrientation {
            a: 0,
            b: 1,
            c: -1,
            d: 0,
        };

        let mirror = Self {
            a: if mirror_x { -1 } else { 1 },
            b: 0,
            c: 0,
            d: if mirror_y { -1 } else { 1 },
        };
        (0..quarter_turns.rem_euclid(4)).fold(mirror, |acc, _| acc.followed_by(CLOCKWISE))
    }

    /// The descriptor that applies `self` and then `next`.
    pub fn followed_by(self, next: ImageOrientation) -> Self {
        // Product next * self, both as [[a, c], [b, d]].
        Self {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
        }
    }

    /// The inverse descriptor. Signed permutation matrices are orthogonal,
    /// so this is the transpose.
    pub fn inverse(self) -> Self {
        Self {
            a: self.a,
            b: self.c,
            c: self.b,
            d: self.d,
        }
    }

    pub fn a(self) -> i32 {
        self.a
    }

    pub fn b(self) -> i32 {
        self.b
    }

    pub fn c(self) -> i32 {
        self.c
    }

    pub fn d(self) -> i32 {
        self.d
    }

    /// Whether cancelling exchanges width and height.
    #[inline]
    pub fn swaps_axes(self) -> bool {
        self.a == 0
    }

    /// Whether cancelling mirrors the destination x axis.
    #[inline]
    pub fn flips_x(self) -> bool {
        self.a + self.b < 0
    }

    /// Whether cancelling mirrors the destination y axis.
    #[inline]
    pub fn flips_y(self) -> bool {
        self.c + self.d < 0
    }

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// The EXIF tag this descriptor corresponds to.
    pub fn to_exif(self) -> ExifOrientation {
        match (self.swaps_axes(), self.flips_x(), self.flips_y()) {
            (false, false, false) => ExifOrientation::Normal,
            (false, true, false) => ExifOrientation::FlipHorizontal,
            (false, true, true) => ExifOrientation::Rotate180,
            (false, false, true) => ExifOrientation::FlipVertical,
            (true, false, false) => ExifOrientation::Transpose,
            (true, true, false) => ExifOrientation::Rotate90CW,
            (true, true, true) => ExifOrientation::Transverse,
            (true, false, true) => ExifOrientation::Rotate270CW,
        }
    }
}

impl From<ExifOrientation> for ImageOrientation {
    fn from(orientation: ExifOrientation) -> Self {
        match orientation {
            ExifOrientation::Normal => Self::from_flags(false, false, false),
            ExifOrientation::FlipHorizontal => Self::from_flags(false, true, false),
            ExifOrientation::Rotate180 => Self::from_flags(false, true, true),
            ExifOrientation::FlipVertical => Self::from_flags(false, false, true),
            ExifOrientation::Transpose => Self::from_flags(true, false, false),
            ExifOrientation::Rotate90CW => Self::from_flags(true, true, false),
            ExifOrientation::Transverse => Self::from_flags(true, true, true),
            ExifOrientation::Rotate270CW => Self::from_flags(true, false, true),
        }
    }
}

impl TryFrom<[i32; 4]> for ImageOrientation {
    type Error = OrientationError;

    fn try_from([a, b, c, d]: [i32; 4]) -> Result<Self, Self::Error> {
        Self::new(a, b, c, d)
    }
}

impl From<ImageOrientation> for [i32; 4] {
    fn from(orientation: ImageOrientation) -> Self {
        [orientation.a, orientation.b, orientation.c, orientation.d]
    }
}
