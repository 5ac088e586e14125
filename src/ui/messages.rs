//! Console status lines: icon + color, one helper per severity.

use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use crate::utils::formatting::bold;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}", CYAN, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}", GREEN, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}", YELLOW, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}", RED, ICON_ERR, RESET, msg);
}

/// Section header, e.g. before the break list
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}", bold(&format!("=== {} ===", msg)));
}
