use chrono::TimeDelta;
use serde::Serialize;

/// Longest gap between two consecutive photos still counted as shooting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakThreshold {
    minutes: u32,
}

impl BreakThreshold {
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn as_delta(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.minutes) * 60)
    }

    /// Strict comparison: a gap equal to the threshold is still active time.
    pub fn is_break(&self, gap: TimeDelta) -> bool {
        gap > self.as_delta()
    }
}

impl Default for BreakThreshold {
    fn default() -> Self {
        Self::from_minutes(10)
    }
}
