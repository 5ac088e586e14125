use std::path::Path;

/// Image formats scanned by default.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "nef"];

/// True when the file extension is one of `extensions` (case-insensitive).
pub fn has_image_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
