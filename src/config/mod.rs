use crate::errors::{AppError, AppResult};
use crate::extract::ExtractorKind;
use crate::models::break_threshold::BreakThreshold;
use crate::models::image_kind::default_extensions;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_FILE: &str = "image_timestamps.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gaps longer than this (minutes) are breaks
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Prompt for the break length when `--break` is not given
    #[serde(default)]
    pub ask_break: bool,
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
    #[serde(default)]
    pub backend: ExtractorKind,
    #[serde(default = "default_exiftool_path")]
    pub exiftool_path: String,
    /// Cache file name, created inside the photo folder
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_break_minutes() -> u32 {
    10
}
fn default_use_cache() -> bool {
    true
}
fn default_exiftool_path() -> String {
    "exiftool".to_string()
}
fn default_cache_file() -> String {
    DEFAULT_CACHE_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            break_minutes: default_break_minutes(),
            ask_break: false,
            use_cache: default_use_cache(),
            backend: ExtractorKind::default(),
            exiftool_path: default_exiftool_path(),
            cache_file: default_cache_file(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("phototime")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".phototime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("phototime.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    /// Write this configuration to `path`, creating parent folders
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml =
            serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))
    }

    pub fn break_threshold(&self) -> BreakThreshold {
        BreakThreshold::from_minutes(self.break_minutes)
    }
}
