//! Active photographing time: sum of the gaps between consecutive captures,
//! leaving out every gap longer than the break threshold.

use crate::models::break_threshold::BreakThreshold;
use crate::models::capture_time::CaptureTime;
use crate::models::session::SessionTime;
use chrono::TimeDelta;

pub fn compute(timestamps: &[CaptureTime], threshold: BreakThreshold) -> SessionTime {
    if timestamps.is_empty() {
        return SessionTime::NoData;
    }

    // Sort a copy; the caller's collection is left untouched
    let mut sorted = timestamps.to_vec();
    sorted.sort();

    let mut total = TimeDelta::zero();
    let mut previous = sorted[0];

    for current in &sorted[1..] {
        let gap = current.as_datetime() - previous.as_datetime();

        if !threshold.is_break(gap) {
            total += gap;
        }

        previous = *current;
    }

    SessionTime::Elapsed(total)
}
