use crate::errors::{AppError, AppResult};
use crate::models::capture_time::CaptureTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use serde::Serialize;

/// One row of the cache. `timestamp` is `None` for files without a capture tag.
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    pub filename: String,
    pub timestamp: Option<CaptureTime>,
}

/// Stored timestamp string for `filename`, if any.
pub fn lookup(conn: &Connection, filename: &str) -> AppResult<Option<String>> {
    let ts: Option<Option<String>> = conn
        .query_row(
            "SELECT timestamp FROM image_timestamps WHERE filename = ?1",
            [filename],
            |row| row.get(0),
        )
        .optional()?;

    Ok(ts.flatten())
}

/// Whether `filename` was already processed (with or without a timestamp).
pub fn contains(conn: &Connection, filename: &str) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM image_timestamps WHERE filename = ?1",
            [filename],
            |row| row.get(0),
        )
        .optional()?;

    Ok(found.is_some())
}

/// Insert-or-skip: an existing row for `filename` is left untouched.
/// Returns true when a row was written.
pub fn record(conn: &Connection, filename: &str, ts: &CaptureTime) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO image_timestamps (filename, timestamp) VALUES (?1, ?2)
         ON CONFLICT(filename) DO NOTHING",
    )?;
    let n = stmt.execute(params![filename, ts.to_cache_string()])?;
    Ok(n > 0)
}

/// Remember that `filename` has no capture time, so it is not extracted again.
pub fn record_missing(conn: &Connection, filename: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO image_timestamps (filename, timestamp) VALUES (?1, NULL)
         ON CONFLICT(filename) DO NOTHING",
    )?;
    let n = stmt.execute([filename])?;
    Ok(n > 0)
}

/// Every cached capture time, in storage order.
pub fn load_all(conn: &Connection) -> AppResult<Vec<CaptureTime>> {
    let mut stmt =
        conn.prepare("SELECT timestamp FROM image_timestamps WHERE timestamp IS NOT NULL")?;

    let rows = stmt.query_map([], |row| {
        let raw: String = row.get(0)?;
        parse_cached(&raw)
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All rows ordered by file name.
pub fn list_entries(conn: &Connection) -> AppResult<Vec<CacheEntry>> {
    let mut stmt =
        conn.prepare("SELECT filename, timestamp FROM image_timestamps ORDER BY filename ASC")?;

    let rows = stmt.query_map([], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// (rows, rows with a timestamp)
pub fn count_entries(conn: &Connection) -> AppResult<(i64, i64)> {
    let counts = conn.query_row(
        "SELECT COUNT(*), COUNT(timestamp) FROM image_timestamps",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(counts)
}

pub fn map_entry(row: &Row) -> Result<CacheEntry> {
    let filename: String = row.get("filename")?;
    let raw: Option<String> = row.get("timestamp")?;

    let timestamp = match raw {
        Some(s) => Some(parse_cached(&s)?),
        None => None,
    };

    Ok(CacheEntry {
        filename,
        timestamp,
    })
}

fn parse_cached(raw: &str) -> Result<CaptureTime> {
    CaptureTime::from_cache_str(raw).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(raw.to_string())),
        )
    })
}
