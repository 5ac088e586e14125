use super::TimestampExtractor;
use crate::errors::{AppError, AppResult};
use crate::models::capture_time::CaptureTime;
use regex::Regex;
use std::path::Path;
use std::process::Command;

/// Runs `exiftool -DateTimeOriginal -s3 <file>` and parses its stdout.
pub struct ExiftoolExtractor {
    program: String,
    date_re: Regex,
}

impl ExiftoolExtractor {
    pub fn new(program: &str) -> AppResult<Self> {
        // exiftool may append sub-seconds or a UTC offset; only the prefix matters
        let date_re = Regex::new(r"^(\d{4}:\d{2}:\d{2} \d{2}:\d{2}:\d{2})")
            .map_err(|e| AppError::Extractor(e.to_string()))?;

        Ok(Self {
            program: program.to_string(),
            date_re,
        })
    }

    fn parse_output(&self, stdout: &str) -> Option<CaptureTime> {
        let line = stdout.trim();
        let caps = self.date_re.captures(line)?;
        CaptureTime::from_exif_str(&caps[1]).ok()
    }
}

impl TimestampExtractor for ExiftoolExtractor {
    fn extract(&self, path: &Path) -> AppResult<Option<CaptureTime>> {
        let output = Command::new(&self.program)
            .args(["-DateTimeOriginal", "-s3"])
            .arg(path)
            .output()
            .map_err(|e| AppError::Extractor(format!("cannot run '{}': {}", self.program, e)))?;

        // Exit status is ignored; unreadable files leave stdout empty
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(self.parse_output(&stdout))
    }

    fn name(&self) -> &'static str {
        "exiftool"
    }
}
