//! Image decoding with metadata ingestion.
//!
//! This module turns encoded bytes into an [`Image`](crate::Image):
//! - Pixels are decoded to RGB8 with the `image` crate, with no orientation
//!   correction applied
//! - EXIF fields are parsed with `kamadak-exif` and flattened into the
//!   metadata map
//!
//! # Metadata keys
//!
//! Every EXIF field is stored as `exif-ifd{N}-{TagName}`, where `N` is the
//! IFD it was found in (0 = primary image, 1 = thumbnail). The primary
//! orientation is also copied to the canonical `Orientation` key, which is
//! what the autorotate operator reads.
//!
//! # Examples
//!
//! ```ignore
//! use upright_core::{decode::decode_image, autorotate};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! let upright = autorotate(Some(&image), None).unwrap();
//! ```

mod exif;
mod pixels;

#[cfg(test)]
pub(crate) mod fixtures;

use thiserror::Error;

pub use self::exif::read_exif_metadata;
pub use self::pixels::decode_image;

/// Error types for image decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}
