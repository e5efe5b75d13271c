//! Cancelling an image's orientation by remapping its pixels.
//!
//! Cancelling is a two-step contract. The caller first asks for the upright
//! size with [`compute_cancelled_size`], allocates a destination buffer of
//! that size, then calls [`cancel_orientation`] to fill it. The transform
//! never allocates pixel storage itself.
//!
//! # Algorithm
//!
//! Every source pixel `(x, y)` is moved to exactly one destination pixel:
//!
//! ```text
//! (u, v) = swap_xy ? (y, x) : (x, y)
//! u      = flip_x  ? dst_w - 1 - u : u
//! v      = flip_y  ? dst_h - 1 - v : v
//! ```
//!
//! Each step is invertible, so the mapping is a permutation of the pixel grid.

use log::trace;

use crate::error::OrientationError;
use crate::orientation::ImageOrientation;
use crate::types::{Dimensions, BYTES_PER_PIXEL};

/// Compute the dimensions of an image after its orientation is cancelled.
///
/// Width and height are exchanged when the descriptor swaps axes.
///
/// # Errors
///
/// Returns `OrientationError::InvalidDimensions` if `width` or `height` is zero.
///
/// # Example
///
/// ```
/// use upright_core::{compute_cancelled_size, ImageOrientation};
///
/// let orientation = ImageOrientation::new(0, 1, 1, 0).unwrap();
/// let size = compute_cancelled_size(&orientation, 100, 200).unwrap();
/// assert_eq!((size.width, size.height), (200, 100));
/// ```
pub fn compute_cancelled_size(
    orientation: &ImageOrientation,
    width: u32,
    height: u32,
) -> Result<Dimensions, OrientationError> {
    let dims = Dimensions::new(width, height)?;
    Ok(cancelled_dimensions(orientation, dims))
}

#[inline]
fn cancelled_dimensions(orientation: &ImageOrientation, dims: Dimensions) -> Dimensions {
    if orientation.swaps_axes() {
        dims.swapped()
    } else {
        dims
    }
}

/// Write the upright version of `source` into `destination`.
///
/// # Arguments
///
/// * `orientation` - Descriptor of the source's stored orientation
/// * `source` - RGBA pixels of the stored image, row-major
/// * `source_width` - Stored image width
/// * `source_height` - Stored image height
/// * `destination` - Caller-allocated RGBA buffer sized for
///   [`compute_cancelled_size`] of the same arguments
///
/// # Errors
///
/// Returns `OrientationError::InvalidDimensions` for a zero dimension and
/// `OrientationError::BufferSizeMismatch` if either buffer has the wrong
/// length. Nothing is written to `destination` on error.
pub fn cancel_orientation(
    orientation: &ImageOrientation,
    source: &[u8],
    source_width: u32,
    source_height: u32,
    destination: &mut [u8],
) -> Result<(), OrientationError> {
    let src_dims = Dimensions::new(source_width, source_height)?;
    let dst_dims = cancelled_dimensions(orientation, src_dims);
    src_dims.check_rgba_len(source)?;
    dst_dims.check_rgba_len(destination)?;

    trace!(
        "Cancelling {:?} on {}x{} image",
        orientation.to_exif(),
        source_width,
        source_height
    );

    // Fast path: upright images are copied as-is
    if orientation.is_identity() {
        destination.copy_from_slice(source);
        return Ok(());
    }

    let swap = orientation.swaps_axes();
    let flip_x = orientation.flips_x();
    let flip_y = orientation.flips_y();
    let dst_w = dst_dims.width as usize;
    let dst_h = dst_dims.height as usize;
    let src_stride = source_width as usize * BYTES_PER_PIXEL;

    for (y, row) in source.chunks_exact(src_stride).enumerate() {
        for (x, pixel) in row.chunks_exact(BYTES_PER_PIXEL).enumerate() {
            let (mut u, mut v) = if swap { (y, x) } else { (x, y) };
            if flip_x {
                u = dst_w - 1 - u;
            }
            if flip_y {
                v = dst_h - 1 - v;
            }

            let dst_idx = (v * dst_w + u) * BYTES_PER_PIXEL;
            destination[dst_idx..dst_idx + BYTES_PER_PIXEL].copy_from_slice(pixel);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::ExifOrientation;

    /// Create a test image where pixel (x, y) holds [x, y, x + y, 255].
    fn test_image(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(x as u8);
                pixels.push(y as u8);
                pixels.push((x + y) as u8);
                pixels.push(255);
            }
        }
        pixels
    }

    fn cancel(orientation: &ImageOrientation, source: &[u8], width: u32, height: u32) -> Vec<u8> {
        let size = compute_cancelled_size(orientation, width, height).unwrap();
        let mut destination = vec![0u8; size.rgba_len()];
        cancel_orientation(orientation, source, width, height, &mut destination).unwrap();
        destination
    }

    #[test]
    fn test_cancelled_size_swaps_for_transpose() {
        let orientation = ImageOrientation::new(0, 1, 1, 0).unwrap();
        let size = compute_cancelled_size(&orientation, 100, 200).unwrap();
        assert_eq!(size.width, 200);
        assert_eq!(size.height, 100);
    }

    #[test]
    fn test_cancelled_size_per_exif() {
        for orientation in ExifOrientation::ALL {
            let descriptor = ImageOrientation::from(orientation);
            let size = compute_cancelled_size(&descriptor, 6000, 4000).unwrap();
            if orientation.code() >= 5 {
                assert_eq!((size.width, size.height), (4000, 6000), "{orientation:?}");
            } else {
                assert_eq!((size.width, size.height), (6000, 4000), "{orientation:?}");
            }
        }
    }

    #[test]
    fn test_cancelled_size_rejects_zero() {
        let orientation = ImageOrientation::IDENTITY;
        assert_eq!(
            compute_cancelled_size(&orientation, 0, 10),
            Err(OrientationError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(compute_cancelled_size(&orientation, 10, 0).is_err());
    }

    #[test]
    fn test_two_pixel_transpose() {
        let orientation = ImageOrientation::new(0, 1, 1, 0).unwrap();
        let source = [255, 0, 0, 100, 0, 0, 0, 100];

        let size = compute_cancelled_size(&orientation, 2, 1).unwrap();
        assert_eq!((size.width, size.height), (1, 2));

        let mut destination = [0u8; 8];
        cancel_orientation(&orientation, &source, 2, 1, &mut destination).unwrap();
        assert_eq!(destination, [255, 0, 0, 100, 0, 0, 0, 100]);
    }

    #[test]
    fn test_two_pixel_quarter_turns() {
        let source = [255, 0, 0, 100, 0, 0, 0, 100];

        // Rotate 90 CW: the left pixel ends up on top
        let cw = ImageOrientation::from(ExifOrientation::Rotate90CW);
        assert_eq!(cancel(&cw, &source, 2, 1), [255, 0, 0, 100, 0, 0, 0, 100]);

        // Rotate 90 CCW: the left pixel ends up at the bottom
        let ccw = ImageOrientation::from(ExifOrientation::Rotate270CW);
        assert_eq!(cancel(&ccw, &source, 2, 1), [0, 0, 0, 100, 255, 0, 0, 100]);
    }

    #[test]
    fn test_single_pixel_unchanged() {
        let source = [10, 20, 30, 40];
        for orientation in ExifOrientation::ALL {
            let descriptor = ImageOrientation::from(orientation);
            assert_eq!(cancel(&descriptor, &source, 1, 1), source, "{orientation:?}");
        }
    }

    #[test]
    fn test_identity_copies() {
        let source = test_image(5, 3);
        assert_eq!(cancel(&ImageOrientation::IDENTITY, &source, 5, 3), source);
    }

    #[test]
    fn test_flip_horizontal() {
        let source = test_image(3, 2);
        let orientation = ImageOrientation::from(ExifOrientation::FlipHorizontal);
        let result = cancel(&orientation, &source, 3, 2);

        // Destination (0, 0) comes from source (2, 0)
        assert_eq!(&result[0..4], &[2, 0, 2, 255]);
        // Destination (2, 1) comes from source (0, 1)
        assert_eq!(&result[20..24], &[0, 1, 1, 255]);
    }

    #[test]
    fn test_rotate_180() {
        let source = test_image(3, 2);
        let orientation = ImageOrientation::from(ExifOrientation::Rotate180);
        let result = cancel(&orientation, &source, 3, 2);

        // First destination pixel is the last source pixel
        assert_eq!(&result[0..4], &[2, 1, 3, 255]);
        assert_eq!(&result[20..24], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_rotate_90_cw_corners() {
        // 3x2 source becomes 2x3
        let source = test_image(3, 2);
        let orientation = ImageOrientation::from(ExifOrientation::Rotate90CW);
        let result = cancel(&orientation, &source, 3, 2);

        // Source bottom-left (0, 1) lands at top-left
        assert_eq!(&result[0..4], &[0, 1, 1, 255]);
        // Source top-left (0, 0) lands at top-right
        assert_eq!(&result[4..8], &[0, 0, 0, 255]);
        // Source top-right (2, 0) lands at bottom-right
        assert_eq!(&result[20..24], &[2, 0, 2, 255]);
    }

    #[test]
    fn test_destination_length_mismatch() {
        let orientation = ImageOrientation::from(ExifOrientation::Rotate90CW);
        let source = test_image(3, 2);
        let mut destination = vec![7u8; 20];

        let result = cancel_orientation(&orientation, &source, 3, 2, &mut destination);
        assert_eq!(
            result,
            Err(OrientationError::BufferSizeMismatch {
                expected: 24,
                actual: 20
            })
        );
        // Nothing written on failure
        assert!(destination.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_source_length_mismatch() {
        let orientation = ImageOrientation::IDENTITY;
        let mut destination = vec![0u8; 24];
        let result = cancel_orientation(&orientation, &[0u8; 23], 3, 2, &mut destination);
        assert!(matches!(
            result,
            Err(OrientationError::BufferSizeMismatch { expected: 24, .. })
        ));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let orientation = ImageOrientation::IDENTITY;
        let mut destination = Vec::new();
        let result = cancel_orientation(&orientation, &[], 0, 4, &mut destination);
        assert!(matches!(
            result,
            Err(OrientationError::InvalidDimensions { width: 0, height: 4 })
        ));
    }

    #[test]
    fn test_single_column_image() {
        // 1x3 column under a transpose becomes a 3x1 row in the same order
        let source = test_image(1, 3);
        let orientation = ImageOrientation::from(ExifOrientation::Transpose);
        let result = cancel(&orientation, &source, 1, 3);
        assert_eq!(&result[0..4], &[0, 0, 0, 255]);
        assert_eq!(&result[4..8], &[0, 1, 1, 255]);
        assert_eq!(&result[8..12], &[0, 2, 2, 255]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
