use crate::db::pool::DbPool;
use crate::db::queries::count_entries;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::megabytes;
use ansi_term::Colour;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_cache_info(pool: &DbPool) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        pool.path.display(),
        RESET
    );
    println!("{}• Size:{} {}", CYAN, RESET, megabytes(file_size));

    //
    // 2) RECORDS
    //
    let (total, dated) = count_entries(&pool.conn)?;
    println!("{}• Files cached:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);
    println!("{}• With capture time:{} {}", CYAN, RESET, dated);

    let undated = total - dated;
    if undated > 0 {
        println!(
            "{}• Without capture time:{} {}",
            CYAN,
            RESET,
            Colour::Yellow.paint(undated.to_string())
        );
    }

    //
    // 3) CAPTURE RANGE
    //
    // The stored layout sorts lexicographically in time order
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(timestamp), MAX(timestamp) FROM image_timestamps",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Capture range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
