//! Same walk as `session::compute`, but keeps track of every break so the
//! CLI can show where the session was interrupted.

use crate::models::break_threshold::BreakThreshold;
use crate::models::capture_time::CaptureTime;
use crate::models::session::{Break, SessionSummary};
use chrono::TimeDelta;

pub fn summarize(timestamps: &[CaptureTime], threshold: BreakThreshold) -> Option<SessionSummary> {
    let mut sorted = timestamps.to_vec();
    sorted.sort();

    let first = *sorted.first()?;
    let last = *sorted.last()?;

    let mut breaks = Vec::new();
    let mut total = TimeDelta::zero();

    for w in sorted.windows(2) {
        let (prev, curr) = (w[0], w[1]);
        let gap = curr.as_datetime() - prev.as_datetime();

        if threshold.is_break(gap) {
            breaks.push(Break {
                start: prev,
                end: curr,
                length: gap,
            });
        } else {
            total += gap;
        }
    }

    Some(SessionSummary {
        photos: sorted.len(),
        first,
        last,
        threshold,
        breaks,
        total,
    })
}
