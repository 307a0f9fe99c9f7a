//! The image value operators consume and produce.

use crate::metadata::Metadata;

/// RGB8 buffer length for `width` x `height`, or `None` on overflow.
fn byte_size(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(3)
}

/// A decoded image with RGB pixel data and its metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
    /// Metadata carried alongside the pixels.
    pub metadata: Metadata,
}

impl Image {
    /// Create a new Image with the given dimensions and pixel data and no metadata.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            Some(pixels.len()),
            byte_size(width, height),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
            metadata: Metadata::new(),
        }
    }

    /// Attach metadata, replacing whatever was there.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Create an Image from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage, metadata: Metadata) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
            metadata,
        }
    }

    /// Borrow the pixels as an image::RgbImage view.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn as_rgb_image(&self) -> Option<image::ImageBuffer<image::Rgb<u8>, &[u8]>> {
        image::ImageBuffer::from_raw(self.width, self.height, self.pixels.as_slice())
    }

    /// Expected pixel buffer length for the current dimensions.
    ///
    /// `None` if it doesn't fit in `usize`.
    pub fn expected_byte_size(&self) -> Option<usize> {
        byte_size(self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
