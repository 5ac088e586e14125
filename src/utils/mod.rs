pub mod colors;
pub mod formatting;
pub mod fs_scan;
pub mod table;
