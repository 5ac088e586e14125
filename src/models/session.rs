use super::break_threshold::BreakThreshold;
use super::capture_time::CaptureTime;
use crate::utils::formatting::format_elapsed;
use chrono::TimeDelta;
use serde::{Serialize, Serializer};
use std::fmt;

pub const NO_DATA_MESSAGE: &str = "No valid images with EXIF timestamps found.";

/// Result of the session calculator.
///
/// `NoData` means there was nothing to measure and is never equal to an
/// elapsed time of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTime {
    NoData,
    Elapsed(TimeDelta),
}

impl SessionTime {
    pub fn elapsed(&self) -> Option<TimeDelta> {
        match self {
            SessionTime::NoData => None,
            SessionTime::Elapsed(d) => Some(*d),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, SessionTime::NoData)
    }
}

impl fmt::Display for SessionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionTime::NoData => f.write_str(NO_DATA_MESSAGE),
            SessionTime::Elapsed(d) => f.write_str(&format_elapsed(*d)),
        }
    }
}

/// A gap that exceeded the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Break {
    pub start: CaptureTime,
    pub end: CaptureTime,
    #[serde(serialize_with = "serialize_seconds")]
    pub length: TimeDelta,
}

/// Breakdown of a session, for `time --details` and `time --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub photos: usize,
    pub first: CaptureTime,
    pub last: CaptureTime,
    pub threshold: BreakThreshold,
    pub breaks: Vec<Break>,
    #[serde(rename = "active_seconds", serialize_with = "serialize_seconds")]
    pub total: TimeDelta,
}

impl SessionSummary {
    /// Wall-clock span between the first and the last photo.
    pub fn span(&self) -> TimeDelta {
        self.last.as_datetime() - self.first.as_datetime()
    }

    pub fn break_time(&self) -> TimeDelta {
        self.breaks
            .iter()
            .fold(TimeDelta::zero(), |acc, b| acc + b.length)
    }
}

fn serialize_seconds<S: Serializer>(d: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(d.num_seconds())
}
