//! Reading the EXIF Orientation tag from encoded image bytes.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use log::debug;

use crate::orientation::ExifOrientation;

/// Extract the EXIF orientation from JPEG, TIFF, PNG, WebP or HEIF bytes.
///
/// Returns `ExifOrientation::Normal` if no EXIF data is found or the
/// orientation cannot be determined.
pub fn read_orientation(bytes: &[u8]) -> ExifOrientation {
    let mut cursor = Cursor::new(bytes);

    let exif = match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif,
        Err(err) => {
            debug!("No usable EXIF data: {err}");
            return ExifOrientation::Normal;
        }
    };

    let Some(value) = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
    else {
        return ExifOrientation::Normal;
    };

    ExifOrientation::from_code(value).unwrap_or_else(|| {
        debug!("Ignoring out-of-range EXIF orientation {value}");
        ExifOrientation::Normal
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Little-endian TIFF whose only IFD holds an Orientation (SHORT) entry.
    pub(crate) fn tiff_with_orientation(value: u16) -> Vec<u8> {
        let mut tiff = vec![b'I', b'I', 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
        tiff.extend_from_slice(&1u16.to_le_bytes()); // entry count
        tiff.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation
        tiff.extend_from_slice(&3u16.to_le_bytes()); // SHORT
        tiff.extend_from_slice(&1u32.to_le_bytes()); // count
        tiff.extend_from_slice(&value.to_le_bytes());
        tiff.extend_from_slice(&[0, 0]); // value padding
        tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD
        tiff
    }

    /// Insert an APP1 Exif segment right after the JPEG SOI marker.
    pub(crate) fn jpeg_with_orientation(jpeg: &[u8], value: u16) -> Vec<u8> {
        let tiff = tiff_with_orientation(value);
        let segment_len = (2 + 6 + tiff.len()) as u16;

        let mut out = Vec::with_capacity(jpeg.len() + segment_len as usize + 2);
        out.extend_from_slice(&jpeg[..2]);
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&segment_len.to_be_bytes());
        out.extend_from_slice(b"Exif\0\0");
        out.extend_from_slice(&tiff);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
            .unwrap();
        bytes
    }

    #[test]
    fn test_orientation_from_tiff() {
        for value in 1..=8u16 {
            let orientation = read_orientation(&tiff_with_orientation(value));
            assert_eq!(orientation.code() as u16, value);
        }
    }

    #[test]
    fn test_orientation_from_jpeg_app1() {
        let jpeg = jpeg_with_orientation(&encode_jpeg(4, 2), 6);
        assert_eq!(read_orientation(&jpeg), ExifOrientation::Rotate90CW);
    }

    #[test]
    fn test_orientation_no_exif() {
        assert_eq!(read_orientation(&encode_jpeg(2, 2)), ExifOrientation::Normal);
    }

    #[test]
    fn test_orientation_out_of_range() {
        assert_eq!(
            read_orientation(&tiff_with_orientation(42)),
            ExifOrientation::Normal
        );
    }

    #[test]
    fn test_orientation_garbage_bytes() {
        assert_eq!(read_orientation(&[]), ExifOrientation::Normal);
        assert_eq!(
            read_orientation(&[0x00, 0x01, 0x02, 0x03]),
            ExifOrientation::Normal
        );
    }
}
