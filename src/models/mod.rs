pub mod break_threshold;
pub mod capture_time;
pub mod image_kind;
pub mod session;
