//! Encoded test images.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// TIFF-structured EXIF payload (without the `Exif\0\0` marker).
///
/// Little-endian. IFD0 holds `orientation` and a Make string; when
/// `thumbnail_orientation` is set, IFD1 holds a second Orientation field.
pub fn tiff_exif(orientation: u16, thumbnail_orientation: Option<u16>) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"II*\0");
    out.extend_from_slice(&8u32.to_le_bytes());

    // IFD0 at 8: 2 entries -> 2 + 24 + 4 = 30 bytes, Make data at 38
    let ifd1_offset: u32 = if thumbnail_orientation.is_some() { 44 } else { 0 };
    out.extend_from_slice(&2u16.to_le_bytes());
    // Make (0x010F), ASCII, 6 bytes at offset 38
    out.extend_from_slice(&0x010Fu16.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&6u32.to_le_bytes());
    out.extend_from_slice(&38u32.to_le_bytes());
    // Orientation (0x0112), SHORT, inline
    out.extend_from_slice(&0x0112u16.to_le_bytes());
    out.extend_from_slice(&3u16.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&orientation.to_le_bytes());
    out.extend_from_slice(&[0, 0]);
    out.extend_from_slice(&ifd1_offset.to_le_bytes());
    out.extend_from_slice(b"Canon\0");

    if let Some(thumb) = thumbnail_orientation {
        debug_assert_eq!(out.len(), 44);
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&0x0112u16.to_le_bytes());
        out.extend_from_slice(&3u16.to_le_bytes());
        out.extend_from_slice(&1u32.to_le_bytes());
        out.extend_from_slice(&thumb.to_le_bytes());
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&0u32.to_le_bytes());
    }
    out
}

/// Encode a solid RGB JPEG.
pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let pixels = vec![128u8; width as usize * height as usize * 3];
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, 90)
        .write_image(&pixels, width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

/// Insert an APP1 EXIF segment right after the JPEG SOI marker.
pub fn jpeg_with_exif(width: u32, height: u32, tiff: &[u8]) -> Vec<u8> {
    let plain = jpeg(width, height);
    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(tiff);
    let len = (payload.len() + 2) as u16;

    let mut out = Vec::with_capacity(plain.len() + payload.len() + 4);
    out.extend_from_slice(&plain[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&plain[2..]);
    out
}
