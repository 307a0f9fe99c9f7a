//! EXIF orientation codes and the rotation policy built on them.
//!
//! Only the four pure-rotation codes (1, 3, 6, 8) are acted on. The mirrored
//! codes (2, 4, 5, 7) and anything outside 1-8 are left alone.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::image::Image;
use crate::metadata::ORIENTATION;

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Map a raw tag value to an orientation. Values outside 1-8 have none.
    pub fn from_value(value: i64) -> Option<Self> {
        Some(match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => return None,
        })
    }

    /// The raw EXIF code.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The clockwise rotation that brings this orientation upright.
    ///
    /// Mirrored orientations have no pure-rotation correction and map to
    /// `D0`, same as `Normal`.
    pub fn angle(self) -> Angle {
        match self {
            Orientation::Rotate90CW => Angle::D90,
            Orientation::Rotate270CW => Angle::D270,
            Orientation::Rotate180 => Angle::D180,
            _ => Angle::D0,
        }
    }

    /// Returns true for the orientations that are pure rotations.
    pub fn is_rotation(self) -> bool {
        matches!(
            self,
            Orientation::Normal
                | Orientation::Rotate180
                | Orientation::Rotate90CW
                | Orientation::Rotate270CW
        )
    }
}

/// The effective orientation tag value of an image.
///
/// A missing tag, or one that can't be read as an integer, reads as 1.
pub fn orientation_value(image: &Image) -> i64 {
    image.metadata.get_int(ORIENTATION).unwrap_or(1)
}

/// The rotation needed to bring `image` upright.
///
/// Total: unhandled codes give `D0` rather than an error. Use
/// [`is_handled`] to tell "already upright" apart from "not supported".
pub fn get_angle(image: &Image) -> Angle {
    Orientation::from_value(orientation_value(image))
        .map(Orientation::angle)
        .unwrap_or(Angle::D0)
}

/// True if the image's orientation is one of the pure rotations (1, 3, 6, 8).
pub fn is_handled(image: &Image) -> bool {
    Orientation::from_value(orientation_value(image)).is_some_and(Orientation::is_rotation)
}
