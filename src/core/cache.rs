//! Cache population: extract every image of a folder at most once.
//!
//! Each file is looked up, extracted and written on its own (autocommit, no
//! surrounding transaction), so an interrupted run leaves a valid cache and
//! the next run resumes where it stopped.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::extract::TimestampExtractor;
use crate::utils::fs_scan::{file_key, list_images};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PopulateReport {
    /// Image files found in the folder
    pub total: usize,
    pub already_cached: usize,
    pub extracted: usize,
    /// Extracted, but no capture time in the metadata
    pub without_timestamp: usize,
}

pub fn populate(
    pool: &DbPool,
    folder: &Path,
    extensions: &[String],
    extractor: &dyn TimestampExtractor,
    progress: &mut dyn Write,
) -> AppResult<PopulateReport> {
    let files = list_images(folder, extensions)?;

    let mut report = PopulateReport {
        total: files.len(),
        ..Default::default()
    };

    for (i, path) in files.iter().enumerate() {
        let key = file_key(path);

        if queries::contains(&pool.conn, &key)? {
            report.already_cached += 1;
            continue;
        }

        writeln!(progress, "Processing image {} of {}", i + 1, report.total)?;

        match extractor.extract(path)? {
            Some(ts) => {
                queries::record(&pool.conn, &key, &ts)?;
            }
            None => {
                queries::record_missing(&pool.conn, &key)?;
                report.without_timestamp += 1;
            }
        }
        report.extracted += 1;
    }

    Ok(report)
}
