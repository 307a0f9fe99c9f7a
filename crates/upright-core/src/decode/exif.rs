//! EXIF field extraction into the metadata map.

use std::io::Cursor;

use exif::{Field, In, Reader, Tag, Value};

use crate::metadata::{Metadata, ORIENTATION};

/// Metadata key for an EXIF field, e.g. `exif-ifd0-Orientation`.
fn field_key(field: &Field) -> String {
    format!("exif-ifd{}-{}", field.ifd_num.index(), field.tag)
}

/// Single-component integer values. Everything else is stored as text.
fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Byte(v) if v.len() == 1 => Some(v[0] as i64),
        Value::Short(v) if v.len() == 1 => Some(v[0] as i64),
        Value::Long(v) if v.len() == 1 => Some(v[0] as i64),
        Value::SByte(v) if v.len() == 1 => Some(v[0] as i64),
        Value::SShort(v) if v.len() == 1 => Some(v[0] as i64),
        Value::SLong(v) if v.len() == 1 => Some(v[0] as i64),
        _ => None,
    }
}

/// Parse EXIF from an encoded image and flatten it into metadata.
///
/// Returns an empty map if the container has no EXIF or it can't be parsed.
pub fn read_exif_metadata(bytes: &[u8]) -> Metadata {
    let mut cursor = Cursor::new(bytes);
    let exif = match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif,
        Err(_) => return Metadata::new(),
    };

    let mut meta = Metadata::new();
    for field in exif.fields() {
        let key = field_key(field);
        match int_value(&field.value) {
            Some(v) => meta.insert(key, v),
            None => meta.insert(key, field.display_value().to_string()),
        };
    }

    if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
        if let Some(value) = field.value.get_uint(0) {
            meta.insert(ORIENTATION, value as i64);
        }
    }

    meta
}
