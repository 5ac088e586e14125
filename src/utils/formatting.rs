//! Formatting utilities used for CLI outputs.

use chrono::TimeDelta;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a duration as `H:MM:SS`, prefixed by `N day(s), ` past 24 hours.
///
/// Examples: `0:05:00`, `12:30:00`, `1 day, 2:03:04`, `3 days, 0:00:10`.
pub fn format_elapsed(d: TimeDelta) -> String {
    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.abs();

    let days = secs / 86_400;
    let rem = secs % 86_400;
    let hours = rem / 3_600;
    let minutes = (rem % 3_600) / 60;
    let seconds = rem % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);

    match days {
        0 => format!("{sign}{clock}"),
        1 => format!("{sign}1 day, {clock}"),
        n => format!("{sign}{n} days, {clock}"),
    }
}

/// Short human form: `02h 25m`.
pub fn mins2readable(d: TimeDelta) -> String {
    let mins = d.num_minutes().abs();
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// File size in MB with two decimals.
pub fn megabytes(bytes: u64) -> String {
    format!("{:.2} MB", (bytes as f64) / (1024.0 * 1024.0))
}
