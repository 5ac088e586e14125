//! Capture-time extraction backends.
//!
//! Both backends answer the same question (when was this photo taken?) and
//! are interchangeable behind [`TimestampExtractor`]. A file without a usable
//! `DateTimeOriginal` tag is `Ok(None)`; only failures of the backend itself
//! (e.g. exiftool missing) are errors.

mod exiftool;
mod native;

pub use exiftool::ExiftoolExtractor;
pub use native::NativeExtractor;

use crate::errors::AppResult;
use crate::models::capture_time::CaptureTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub trait TimestampExtractor {
    /// Capture time of the image at `path`, if it has one.
    fn extract(&self, path: &Path) -> AppResult<Option<CaptureTime>>;

    /// Short label used in console output.
    fn name(&self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Decode EXIF in-process
    #[default]
    Native,
    /// Ask the external `exiftool` program
    Exiftool,
}

/// Build the extractor selected by `kind`.
pub fn build(kind: ExtractorKind, exiftool_path: &str) -> AppResult<Box<dyn TimestampExtractor>> {
    match kind {
        ExtractorKind::Native => Ok(Box::new(NativeExtractor)),
        ExtractorKind::Exiftool => Ok(Box::new(ExiftoolExtractor::new(exiftool_path)?)),
    }
}
