pub mod cache;
pub mod config;
pub mod init;
pub mod scan;
pub mod time;

use crate::cli::parser::{Cli, SourceArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::extract::{self, TimestampExtractor};
use std::path::PathBuf;

/// Photo folder from `--folder`, else the current directory.
pub(crate) fn resolve_folder(cli: &Cli) -> AppResult<PathBuf> {
    match &cli.folder {
        Some(f) => Ok(f.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Extractor from the command-line overrides, falling back to the configuration.
pub(crate) fn build_extractor(
    source: &SourceArgs,
    cfg: &Config,
) -> AppResult<Box<dyn TimestampExtractor>> {
    let kind = source.backend.unwrap_or(cfg.backend);
    let exiftool = source.exiftool.as_deref().unwrap_or(&cfg.exiftool_path);
    extract::build(kind, exiftool)
}
