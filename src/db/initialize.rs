use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `image_timestamps` table if missing.
/// Same layout as caches written by earlier versions, so those are reused as-is.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS image_timestamps (
            filename  TEXT PRIMARY KEY,
            timestamp TEXT
        );
        "#,
    )?;
    Ok(())
}
