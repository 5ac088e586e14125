//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::ensure_schema;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::path::{Path, PathBuf};

pub struct DbPool {
    pub conn: Connection,
    pub path: PathBuf,
}

impl DbPool {
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open `<folder>/<cache_file>` and make sure the table exists.
    pub fn open_cache(folder: &Path, cache_file: &str) -> AppResult<Self> {
        let pool = Self::new(&folder.join(cache_file))?;
        ensure_schema(&pool.conn)?;
        Ok(pool)
    }
}
