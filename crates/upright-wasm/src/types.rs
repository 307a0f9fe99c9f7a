//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Upright types,
//! handling the conversion between Rust and JavaScript data representations.

use serde::Serialize;
use upright_core::{Image, ORIENTATION};
use wasm_bindgen::prelude::*;

/// An image wrapper for JavaScript.
///
/// Holds RGB pixel data and the metadata read from the file.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsImage {
    inner: Image,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions and pixel data, with no metadata.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            inner: Image {
                width,
                height,
                pixels,
                metadata: Default::default(),
            },
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// The `Orientation` tag as an integer.
    ///
    /// `undefined` when the tag is absent, can't be read as an integer
    /// (text, blob, NaN) or doesn't fit in an `i32`.
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> Option<i32> {
        self.inner
            .metadata
            .get_int(ORIENTATION)
            .and_then(|v| i32::try_from(v).ok())
    }

    /// Set the `Orientation` tag.
    #[wasm_bindgen(setter)]
    pub fn set_orientation(&mut self, value: i32) {
        self.inner.metadata.insert(ORIENTATION, value as i64);
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Check whether a metadata key is present.
    pub fn has_metadata(&self, key: &str) -> bool {
        self.inner.metadata.contains(key)
    }

    /// All metadata keys.
    pub fn metadata_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.inner.metadata.keys().map(str::to_string).collect();
        keys.sort_unstable();
        keys
    }

    /// Metadata as a plain JS object
    pub fn metadata(&self) -> Result<JsValue, JsValue> {
        self.inner
            .metadata
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsImage {
    pub(crate) fn from_image(inner: Image) -> Self {
        Self { inner }
    }

    pub(crate) fn as_image(&self) -> &Image {
        &self.inner
    }
}
