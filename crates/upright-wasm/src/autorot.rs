//! WASM bindings for the autorotate operator.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, autorotate } from '@upright/wasm';
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const result = autorotate(image);
//! const upright = result.take_image();
//! console.log(`Rotated ${result.angle} degrees -> ${upright.width}x${upright.height}`);
//! ```

use crate::types::JsImage;
use upright_core::{Autorot, AutorotOutput, Operation};
use wasm_bindgen::prelude::*;

/// Result of `autorotate`: the upright image and the angle it was turned by.
#[wasm_bindgen]
pub struct JsAutorotResult {
    image: Option<JsImage>,
    angle: u32,
}

#[wasm_bindgen]
impl JsAutorotResult {
    /// Clockwise rotation in degrees (0, 90, 180 or 270).
    ///
    /// 0 is also reported for mirrored orientations, which are left as-is;
    /// check `is_handled` on the input to tell them apart.
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> u32 {
        self.angle
    }

    /// Take the output image. Returns `undefined` on a second call.
    pub fn take_image(&mut self) -> Option<JsImage> {
        self.image.take()
    }
}

impl From<AutorotOutput> for JsAutorotResult {
    fn from(output: AutorotOutput) -> Self {
        Self {
            image: Some(JsImage::from_image(output.image)),
            angle: output.angle.degrees(),
        }
    }
}

/// Rotate an image upright according to its `Orientation` tag.
///
/// Orientations 1, 3, 6 and 8 are rotated and every orientation tag is
/// removed from the result. Mirrored orientations (2, 4, 5, 7) and invalid
/// values are returned unchanged.
///
/// # Errors
///
/// Returns an error if the pixel buffer doesn't match the dimensions.
#[wasm_bindgen]
pub fn autorotate(image: &JsImage) -> Result<JsAutorotResult, JsValue> {
    Autorot::new()
        .build(Some(image.as_image()))
        .map(JsAutorotResult::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The clockwise angle in degrees needed to bring the image upright.
#[wasm_bindgen]
pub fn get_angle(image: &JsImage) -> u32 {
    upright_core::get_angle(image.as_image()).degrees()
}

/// True if `autorotate` will rotate this image rather than copy it.
#[wasm_bindgen]
pub fn is_handled(image: &JsImage) -> bool {
    upright_core::is_handled(image.as_image())
}

/// Return a copy of the image with every orientation tag removed.
#[wasm_bindgen]
pub fn remove_angle(image: &JsImage) -> JsImage {
    let mut stripped = image.as_image().clone();
    upright_core::remove_angle(&mut stripped);
    JsImage::from_image(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(width: u32, height: u32, orientation: i32) -> JsImage {
        let mut img = JsImage::new(width, height, vec![7u8; (width * height * 3) as usize]);
        img.set_orientation(orientation);
        img
    }

    #[test]
    fn test_get_angle() {
        assert_eq!(get_angle(&tagged(2, 2, 6)), 90);
        assert_eq!(get_angle(&tagged(2, 2, 3)), 180);
        assert_eq!(get_angle(&tagged(2, 2, 8)), 270);
        assert_eq!(get_angle(&tagged(2, 2, 5)), 0);
    }

    #[test]
    fn test_is_handled() {
        assert!(is_handled(&tagged(2, 2, 1)));
        assert!(!is_handled(&tagged(2, 2, 7)));
    }

    #[test]
    fn test_remove_angle() {
        let img = tagged(2, 2, 6);
        let stripped = remove_angle(&img);
        assert_eq!(stripped.orientation(), None);
        assert_eq!(img.orientation(), Some(6));
    }

    #[test]
    fn test_result_from_output() {
        let output = Autorot::new().build(Some(tagged(4, 2, 6).as_image())).unwrap();
        let mut result = JsAutorotResult::from(output);

        assert_eq!(result.angle(), 90);
        let image = result.take_image().unwrap();
        assert_eq!((image.width(), image.height()), (2, 4));
        assert_eq!(image.orientation(), None);
        assert!(result.take_image().is_none());
    }
}
