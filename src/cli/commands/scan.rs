use super::build_extractor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::{PopulateReport, populate};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, folder: &Path) -> AppResult<()> {
    if let Commands::Scan { source } = cmd {
        let extractor = build_extractor(source, cfg)?;

        info(format!(
            "Scanning {} ({} backend)",
            folder.display(),
            extractor.name()
        ));

        let pool = DbPool::open_cache(folder, &cfg.cache_file)?;
        let report = populate(
            &pool,
            folder,
            &cfg.extensions,
            extractor.as_ref(),
            &mut io::stdout(),
        )?;

        print_report(&report, &pool.path);
    }

    Ok(())
}

pub(crate) fn print_report(report: &PopulateReport, cache: &Path) {
    success(format!(
        "{} image(s) found: {} extracted, {} already cached ({})",
        report.total,
        report.extracted,
        report.already_cached,
        cache.display()
    ));

    if report.without_timestamp > 0 {
        warning(format!(
            "{} image(s) have no capture time and are ignored",
            report.without_timestamp
        ));
    }
}
