//! Non-recursive listing of the image files of a folder.

use crate::errors::{AppError, AppResult};
use crate::models::image_kind::has_image_extension;
use std::fs;
use std::path::{Path, PathBuf};

/// Regular files directly inside `folder` whose extension is in `extensions`,
/// sorted by file name.
pub fn list_images(folder: &Path, extensions: &[String]) -> AppResult<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(AppError::NotAFolder(folder.display().to_string()));
    }

    let mut out = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && has_image_extension(&path, extensions) {
            out.push(path);
        }
    }

    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

/// File name as stored in the cache key.
pub fn file_key(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
