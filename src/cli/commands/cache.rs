use crate::cli::parser::{Commands, ListFormat};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{CacheEntry, list_entries};
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::table::{Column, Table};
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, folder: &Path) -> AppResult<()> {
    if let Commands::Cache {
        info: show_info,
        check,
        vacuum,
        list,
        format,
    } = cmd
    {
        if !(*show_info || *check || *vacuum || *list) {
            warning("Nothing to do: use --info, --check, --vacuum or --list");
            return Ok(());
        }

        // Read-only inspection: never create a cache that is not there
        let cache_path = folder.join(&cfg.cache_file);
        if !cache_path.is_file() {
            warning(format!("No cache in {}", folder.display()));
            return Ok(());
        }

        let pool = DbPool::open_cache(folder, &cfg.cache_file)?;

        //
        // 1) INFO
        //
        if *show_info {
            stats::print_cache_info(&pool)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            info("Running integrity check…");

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            info("Running VACUUM…");
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }

        //
        // 4) LIST
        //
        if *list {
            let entries = list_entries(&pool.conn)?;
            match format {
                ListFormat::Table => print_table(&entries),
                ListFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                ListFormat::Csv => write_csv(&entries)?,
            }
        }
    }

    Ok(())
}

fn print_table(entries: &[CacheEntry]) {
    if entries.is_empty() {
        warning("Cache is empty.");
        return;
    }

    let mut table = Table::new(vec![Column::new("File"), Column::new("Captured")]);
    for e in entries {
        table.add_row(vec![
            e.filename.clone(),
            e.timestamp
                .map(|t| t.to_string())
                .unwrap_or_else(|| "--".to_string()),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} file(s)", entries.len());
}

fn write_csv(entries: &[CacheEntry]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());

    wtr.write_record(["filename", "timestamp"])?;
    for e in entries {
        let ts = e.timestamp.map(|t| t.to_string()).unwrap_or_default();
        wtr.write_record([e.filename.as_str(), ts.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
