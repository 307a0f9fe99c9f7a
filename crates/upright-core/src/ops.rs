//! Pixel primitives the operator delegates to.
//!
//! [`ImageOps`] is the seam between the orientation logic and whatever
//! actually moves pixels. [`PixelOps`] implements it on top of the `image`
//! crate's right-angle rotations.

use image::imageops;
use thiserror::Error;

use crate::angle::Angle;
use crate::image::Image;

/// Errors raised by pixel primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero, or the buffer size would overflow
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero and addressable")]
    InvalidDimensions { width: u32, height: u32 },

    /// The primitive can't handle this image
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Rotate, copy and write primitives.
///
/// Implementations must not touch the metadata beyond carrying it over to
/// the new image unchanged.
pub trait ImageOps {
    /// Rotate `image` clockwise by `angle` into a new image.
    fn rotate(&self, image: &Image, angle: Angle) -> Result<Image, OpError>;

    /// Produce an independent copy of `image`.
    fn copy(&self, image: &Image) -> Result<Image, OpError>;

    /// Finalize `image` into an output.
    ///
    /// May reject images the output can't hold. [`PixelOps`] rejects a zero
    /// width or height, so a 0xN image fails here even when it was only
    /// copied.
    fn write(&self, image: Image) -> Result<Image, OpError>;
}

/// Default primitives backed by `image::imageops`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelOps;

fn check_buffer(image: &Image) -> Result<(), OpError> {
    let Some(expected) = image.expected_byte_size() else {
        return Err(OpError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    };
    if image.pixels.len() != expected {
        return Err(OpError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

impl ImageOps for PixelOps {
    fn rotate(&self, image: &Image, angle: Angle) -> Result<Image, OpError> {
        check_buffer(image)?;
        let Some(view) = image.as_rgb_image() else {
            return Err(OpError::Unsupported(format!(
                "{}x{} RGB buffer",
                image.width, image.height
            )));
        };

        let rotated = match angle {
            Angle::D0 => return Ok(image.clone()),
            Angle::D90 => imageops::rotate90(&view),
            Angle::D180 => imageops::rotate180(&view),
            Angle::D270 => imageops::rotate270(&view),
        };

        Ok(Image::from_rgb_image(rotated, image.metadata.clone()))
    }

    fn copy(&self, image: &Image) -> Result<Image, OpError> {
        check_buffer(image)?;
        Ok(image.clone())
    }

    fn write(&self, image: Image) -> Result<Image, OpError> {
        if image.width == 0 || image.height == 0 {
            return Err(OpError::InvalidDimensions {
                width: image.width,
                height: image.height,
            });
        }
        check_buffer(&image)?;
        Ok(image)
    }
}
