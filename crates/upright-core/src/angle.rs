//! Right-angle rotations.

use serde::{Deserialize, Serialize};

/// A clockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Angle {
    /// No rotation.
    #[default]
    D0,
    /// 90 degrees clockwise.
    D90,
    /// 180 degrees.
    D180,
    /// 270 degrees clockwise (90 counter-clockwise).
    D270,
}

impl Angle {
    /// The rotation in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Angle::D0 => 0,
            Angle::D90 => 90,
            Angle::D180 => 180,
            Angle::D270 => 270,
        }
    }

    /// Build an angle from degrees. Only exact multiples of 90 are accepted;
    /// values outside [0, 360) are wrapped.
    pub fn from_degrees(degrees: i64) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Angle::D0),
            90 => Some(Angle::D90),
            180 => Some(Angle::D180),
            270 => Some(Angle::D270),
            _ => None,
        }
    }

    /// Returns true if rotating by this angle swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Angle::D90 | Angle::D270)
    }

    /// Dimensions of a `width` x `height` image after rotating by this angle.
    pub fn rotated_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}
