//! Autorotate an image by its EXIF orientation tag.
//!
//! For the pure-rotation codes (1, 3, 6, 8) the pixels are rotated upright and
//! every orientation tag is removed, so nothing downstream applies the
//! correction a second time. Mirrored or invalid codes are copied through
//! untouched, tag included.
//!
//! # Examples
//!
//! ```ignore
//! use upright_core::{autorotate, Angle};
//!
//! let mut angle = Angle::D0;
//! let upright = autorotate(Some(&image), Some(&mut angle))?;
//! println!("rotated by {} degrees", angle.degrees());
//! ```

use log::debug;
use thiserror::Error;

use crate::angle::Angle;
use crate::image::Image;
use crate::ops::{ImageOps, OpError, PixelOps};
use crate::orientation::{get_angle, is_handled, orientation_value};
use crate::strip::remove_angle;

/// Errors returned by [`Autorot`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutorotError {
    /// No input image was supplied.
    #[error("autorot: input image is required")]
    MissingInput,

    /// A rotate, copy or write primitive failed.
    #[error(transparent)]
    Operation(#[from] OpError),
}

/// A pipeline step: one build from input to output.
pub trait Operation {
    type Input: ?Sized;
    type Output;
    type Error: std::error::Error;

    /// Run the operation. Nothing is returned unless every step succeeded.
    fn build(&self, input: Option<&Self::Input>) -> Result<Self::Output, Self::Error>;
}

/// Result of a successful autorotate.
#[derive(Debug, Clone, PartialEq)]
pub struct AutorotOutput {
    /// The upright image.
    pub image: Image,
    /// The angle derived from the input's orientation tag.
    ///
    /// This is `D0` both for upright images and for orientations that were
    /// not acted on; see [`crate::orientation::is_handled`].
    pub angle: Angle,
}

/// The autorotate operator.
///
/// Stateless apart from the primitives it delegates pixel work to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autorot<O = PixelOps> {
    ops: O,
}

impl Autorot<PixelOps> {
    /// Create an operator using the default pixel primitives.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: ImageOps> Autorot<O> {
    /// Create an operator over custom primitives.
    pub fn with_ops(ops: O) -> Self {
        Self { ops }
    }
}

impl<O: ImageOps> Operation for Autorot<O> {
    type Input = Image;
    type Output = AutorotOutput;
    type Error = AutorotError;

    fn build(&self, input: Option<&Image>) -> Result<AutorotOutput, AutorotError> {
        let input = input.ok_or(AutorotError::MissingInput)?;

        let angle = get_angle(input);

        let result = if is_handled(input) {
            debug!(
                "autorot: orientation {} -> rotate {}",
                orientation_value(input),
                angle.degrees()
            );
            let mut rotated = self.ops.rotate(input, angle)?;
            remove_angle(&mut rotated);
            rotated
        } else {
            debug!(
                "autorot: orientation {} not handled, copying",
                orientation_value(input)
            );
            self.ops.copy(input)?
        };

        let image = self.ops.write(result)?;
        Ok(AutorotOutput { image, angle })
    }
}

/// Autorotate `input` with the default pixel primitives.
///
/// When `angle` is supplied it receives the angle derived from the input's
/// orientation tag.
pub fn autorotate(input: Option<&Image>, angle: Option<&mut Angle>) -> Result<Image, AutorotError> {
    let output = Autorot::new().build(input)?;
    if let Some(angle) = angle {
        *angle = output.angle;
    }
    Ok(output.image)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
