//! Removal of orientation metadata from a rotated image.

use log::debug;

use crate::image::Image;
use crate::metadata::ORIENTATION;

const VENDOR_PREFIX: &str = "exif-";
const VENDOR_SUFFIX: &str = "-Orientation";

/// True for per-IFD copies of the orientation tag, such as
/// `exif-ifd0-Orientation` or `exif-ifd1-Orientation`.
pub fn is_orientation_duplicate(key: &str) -> bool {
    key.starts_with(VENDOR_PREFIX) && key.ends_with(VENDOR_SUFFIX)
}

/// Remove every orientation tag from `image`.
///
/// Drops the canonical `Orientation` key and any `exif-*-Orientation` key.
/// Running it twice is the same as running it once.
pub fn remove_angle(image: &mut Image) {
    image.metadata.remove(ORIENTATION);

    // Collect first: the map can't be pruned while it is being walked.
    let duplicates: Vec<String> = image
        .metadata
        .keys()
        .filter(|key| is_orientation_duplicate(key))
        .map(str::to_string)
        .collect();

    for key in duplicates {
        debug!("remove_angle: {}", key);
        image.metadata.remove(&key);
    }
}
