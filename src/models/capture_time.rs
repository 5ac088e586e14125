use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// Layout of `DateTimeOriginal` as written by cameras.
pub const EXIF_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Layout used for the `timestamp` column of the cache.
pub const CACHE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Capture instant of a photo. Naive local time, second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureTime(NaiveDateTime);

impl CaptureTime {
    /// Parse the metadata layout (`YYYY:MM:DD HH:MM:SS`).
    pub fn from_exif_str(s: &str) -> AppResult<Self> {
        NaiveDateTime::parse_from_str(s.trim(), EXIF_FORMAT)
            .map(Self)
            .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
    }

    /// Parse the cache layout (`YYYY-MM-DD HH:MM:SS`).
    pub fn from_cache_str(s: &str) -> AppResult<Self> {
        NaiveDateTime::parse_from_str(s.trim(), CACHE_FORMAT)
            .map(Self)
            .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
    }

    /// Convert to the cache layout
    pub fn to_cache_string(&self) -> String {
        self.0.format(CACHE_FORMAT).to_string()
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for CaptureTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

/// Serialized in the cache layout, like every other output.
impl Serialize for CaptureTime {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_cache_string())
    }
}

impl fmt::Display for CaptureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cache_string())
    }
}
