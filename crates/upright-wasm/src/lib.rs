//! Upright WASM - WebAssembly bindings for Upright
//!
//! This crate exposes upright-core's orientation normalization to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for images and their metadata
//! - `decode` - Image decoding bindings (pixels + EXIF metadata)
//! - `autorot` - The autorotate operator and its helpers
//! - `logger` - Browser console backend for `log`
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, autorotate } from '@upright/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const result = autorotate(image);
//! console.log(`Rotated by ${result.angle} degrees`);
//! ```

use wasm_bindgen::prelude::*;

mod autorot;
mod decode;
mod logger;
mod types;

// Re-export public types
pub use autorot::{autorotate, get_angle, is_handled, remove_angle, JsAutorotResult};
pub use decode::{decode_image, read_orientation};
pub use logger::set_log_level;
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(log::LevelFilter::Warn);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
