use super::TimestampExtractor;
use crate::errors::AppResult;
use crate::models::capture_time::CaptureTime;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads `DateTimeOriginal` straight from the file's EXIF block
/// (JPEG, PNG, and TIFF-based raws such as NEF).
pub struct NativeExtractor;

impl TimestampExtractor for NativeExtractor {
    fn extract(&self, path: &Path) -> AppResult<Option<CaptureTime>> {
        // Unreadable or malformed files count as "no timestamp"
        let Ok(file) = File::open(path) else {
            return Ok(None);
        };
        let mut reader = BufReader::new(file);

        let Ok(exif) = Reader::new().read_from_container(&mut reader) else {
            return Ok(None);
        };

        let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
            return Ok(None);
        };

        let ts = match &field.value {
            Value::Ascii(parts) => parts
                .first()
                .and_then(|raw| std::str::from_utf8(raw).ok())
                .and_then(|s| CaptureTime::from_exif_str(s).ok()),
            _ => None,
        };

        Ok(ts)
    }

    fn name(&self) -> &'static str {
        "native"
    }
}
