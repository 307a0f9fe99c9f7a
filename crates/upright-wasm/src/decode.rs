//! Image decoding WASM bindings.
//!
//! Decodes encoded bytes into a [`JsImage`] carrying both pixels and the
//! EXIF metadata the autorotate operator reads.

use crate::types::JsImage;
use upright_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG image from bytes.
///
/// Orientation is not applied here; pass the result to `autorotate`.
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized image or are corrupted.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}, orientation ${image.orientation}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read only the EXIF orientation from encoded bytes, without decoding pixels.
///
/// Returns `undefined` if there is no readable orientation tag.
#[wasm_bindgen]
pub fn read_orientation(bytes: &[u8]) -> Option<i32> {
    decode::read_exif_metadata(bytes)
        .get_int(upright_core::ORIENTATION)
        .and_then(|v| i32::try_from(v).ok())
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_invalid_bytes() {
        assert!(decode_image(&[0x00, 0x01, 0x02, 0x03]).is_err());
    }
}
