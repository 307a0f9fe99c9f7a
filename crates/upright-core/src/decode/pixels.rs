//! Pixel decoding.

use std::io::Cursor;

use image::ImageReader;

use super::exif::read_exif_metadata;
use super::DecodeError;
use crate::image::Image;

/// Decode an encoded image into RGB pixels plus its EXIF metadata.
///
/// Orientation is not applied: the pixels come back as stored, and the
/// `Orientation` key says how to display them.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format can't be recognized.
/// Returns `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<Image, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(Image::from_rgb_image(img.into_rgb8(), read_exif_metadata(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::fixtures;
    use crate::metadata::ORIENTATION;

    #[test]
    fn test_decode_valid_jpeg() {
        let img = decode_image(&fixtures::jpeg(3, 2)).unwrap();
        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.pixels.len(), 18);
        assert!(img.metadata.is_empty());
    }

    #[test]
    fn test_decode_keeps_stored_orientation() {
        let bytes = fixtures::jpeg_with_exif(8, 4, &fixtures::tiff_exif(6, Some(6)));
        let img = decode_image(&bytes).unwrap();

        // Not rotated on decode
        assert_eq!((img.width, img.height), (8, 4));
        assert_eq!(img.metadata.get_int(ORIENTATION), Some(6));
        assert_eq!(img.metadata.get_int("exif-ifd1-Orientation"), Some(6));
    }

    #[test]
    fn test_decode_unknown_format() {
        assert_eq!(
            decode_image(&[0x00, 0x01, 0x02, 0x03]),
            Err(DecodeError::InvalidFormat)
        );
        assert_eq!(decode_image(&[]), Err(DecodeError::InvalidFormat));
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let bytes = fixtures::jpeg(16, 16);
        let result = decode_image(&bytes[..20]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }
}
