//! Upright Core - EXIF orientation normalization
//!
//! This crate brings decoded images upright according to their EXIF
//! orientation tag, and strips the tag afterwards so it is never applied twice.
//!
//! # Module Structure
//!
//! - `metadata` - Typed key/value metadata attached to an image
//! - `orientation` - Orientation codes, the angle table and the handled policy
//! - `strip` - Removal of canonical and per-IFD orientation tags
//! - `ops` - Rotate/copy/write primitives the operator delegates to
//! - `autorot` - The autorotate operator
//! - `decode` - Pixel decoding and EXIF ingestion

pub mod angle;
pub mod autorot;
pub mod decode;
pub mod image;
pub mod metadata;
pub mod ops;
pub mod orientation;
pub mod strip;

pub use crate::angle::Angle;
pub use crate::autorot::{autorotate, Autorot, AutorotError, AutorotOutput, Operation};
pub use crate::image::Image;
pub use crate::metadata::{Metadata, MetadataValue, ORIENTATION};
pub use crate::ops::{ImageOps, OpError, PixelOps};
pub use crate::orientation::{get_angle, is_handled, Orientation};
pub use crate::strip::{is_orientation_duplicate, remove_angle};
