use super::build_extractor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::break_threshold::BreakThreshold;
use crate::models::session::{NO_DATA_MESSAGE, SessionSummary};
use crate::ui::messages::header;
use crate::ui::prompt::ask_break_threshold;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{format_elapsed, mins2readable};
use crate::utils::table::{Column, Table};
use std::io::{self, Write};
use std::path::Path;

pub const RESULT_LABEL: &str = "Total time spent photographing (excluding breaks):";

pub fn handle(cmd: &Commands, cfg: &Config, folder: &Path) -> AppResult<()> {
    if let Commands::Time {
        break_minutes,
        ask,
        no_cache,
        details,
        json,
        source,
    } = cmd
    {
        let extractor = build_extractor(source, cfg)?;

        // Progress and prompts go to stderr in JSON mode, stdout stays parseable
        let mut console: Box<dyn Write> = if *json {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };

        let timestamps = if *no_cache || !cfg.use_cache {
            Core::collect_direct(folder, &cfg.extensions, extractor.as_ref())?
        } else {
            let (ts, _report) =
                Core::collect_cached(folder, cfg, extractor.as_ref(), console.as_mut())?;
            ts
        };

        let threshold = resolve_threshold(*break_minutes, *ask, cfg, console.as_mut())?;

        if *json {
            return print_json(Core::session_summary(&timestamps, threshold));
        }

        let result = Core::session_time(&timestamps, threshold);
        println!("{} {}", RESULT_LABEL, result);

        if *details && let Some(summary) = Core::session_summary(&timestamps, threshold) {
            print_details(&summary);
        }
    }

    Ok(())
}

/// `--break` wins; otherwise prompt when asked to, else the configured default.
fn resolve_threshold(
    break_minutes: Option<u32>,
    ask: bool,
    cfg: &Config,
    out: &mut dyn Write,
) -> AppResult<BreakThreshold> {
    if let Some(m) = break_minutes {
        return Ok(BreakThreshold::from_minutes(m));
    }

    if ask || cfg.ask_break {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        return ask_break_threshold(&mut input, out);
    }

    Ok(cfg.break_threshold())
}

fn print_json(summary: Option<SessionSummary>) -> AppResult<()> {
    let value = match summary {
        Some(s) => serde_json::to_value(&s)?,
        None => serde_json::json!({ "photos": 0, "message": NO_DATA_MESSAGE }),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_details(summary: &SessionSummary) {
    header("Session");
    println!("Photos:    {}", summary.photos);
    println!("First:     {}", summary.first);
    println!("Last:      {}", summary.last);
    println!("Span:      {}", format_elapsed(summary.span()));
    println!(
        "Breaks:    {} (> {} min, {} total)",
        summary.breaks.len(),
        summary.threshold.minutes(),
        mins2readable(summary.break_time())
    );

    if summary.breaks.is_empty() {
        println!("{}", colorize_optional("--"));
        return;
    }

    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("From"),
        Column::new("To"),
        Column::new("Length"),
    ]);

    for (i, b) in summary.breaks.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            b.start.to_string(),
            b.end.to_string(),
            format_elapsed(b.length),
        ]);
    }

    println!();
    print!("{}", table.render());
}
