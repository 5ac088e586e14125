use crate::config::Config;
use crate::core::cache::{PopulateReport, populate};
use crate::core::calculator::{breaks, session};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::extract::TimestampExtractor;
use crate::models::break_threshold::BreakThreshold;
use crate::models::capture_time::CaptureTime;
use crate::models::session::{SessionSummary, SessionTime};
use crate::utils::fs_scan::list_images;
use std::io::Write;
use std::path::Path;

pub struct Core;

impl Core {
    /// Extract every image of `folder` directly, without touching the cache.
    pub fn collect_direct(
        folder: &Path,
        extensions: &[String],
        extractor: &dyn TimestampExtractor,
    ) -> AppResult<Vec<CaptureTime>> {
        let mut out = Vec::new();
        for path in list_images(folder, extensions)? {
            if let Some(ts) = extractor.extract(&path)? {
                out.push(ts);
            }
        }
        Ok(out)
    }

    /// Bring the folder's cache up to date, then read every cached timestamp.
    pub fn collect_cached(
        folder: &Path,
        cfg: &Config,
        extractor: &dyn TimestampExtractor,
        progress: &mut dyn Write,
    ) -> AppResult<(Vec<CaptureTime>, PopulateReport)> {
        let pool = DbPool::open_cache(folder, &cfg.cache_file)?;
        let report = populate(&pool, folder, &cfg.extensions, extractor, progress)?;
        let timestamps = queries::load_all(&pool.conn)?;
        Ok((timestamps, report))
    }

    pub fn session_time(timestamps: &[CaptureTime], threshold: BreakThreshold) -> SessionTime {
        session::compute(timestamps, threshold)
    }

    pub fn session_summary(
        timestamps: &[CaptureTime],
        threshold: BreakThreshold,
    ) -> Option<SessionSummary> {
        breaks::summarize(timestamps, threshold)
    }
}
