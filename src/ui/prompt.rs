use crate::errors::{AppError, AppResult};
use crate::models::break_threshold::BreakThreshold;
use std::io::{BufRead, Write};

pub const BREAK_PROMPT: &str = "Enter the break duration in minutes: ";

/// Ask for the break length until a whole, non-negative number is typed.
///
/// Generic over the streams so it can be driven from tests; the CLI passes
/// locked stdin and stdout (stderr in JSON mode).
pub fn ask_break_threshold<R: BufRead, W: Write + ?Sized>(
    input: &mut R,
    out: &mut W,
) -> AppResult<BreakThreshold> {
    loop {
        write!(out, "{}", BREAK_PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::Prompt(
                "input closed before a break duration was entered".into(),
            ));
        }

        match line.trim().parse::<i64>() {
            Err(_) => writeln!(out, "Invalid input. Please enter a number.")?,
            Ok(n) if n < 0 => writeln!(out, "Please enter a positive number.")?,
            Ok(n) => match u32::try_from(n) {
                Ok(minutes) => return Ok(BreakThreshold::from_minutes(minutes)),
                Err(_) => writeln!(out, "Invalid input. Please enter a number.")?,
            },
        }
    }
}
