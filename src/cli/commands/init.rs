use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    info("Initializing phototime…");

    if path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save(path)?;

    success(format!("Config file: {}", path.display()));
    Ok(())
}
