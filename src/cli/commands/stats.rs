use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::stats::run_reports;
use crate::core::{filter, loader};
use crate::errors::AppResult;
use crate::models::FilterSelection;
use crate::shell::raw::render_rows;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};

/// Handle the `stats` command: one load → filter → report round, no prompts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        selection,
        format,
        raw,
    } = cmd
    {
        let loaded = loader::load(selection.city, cfg)?;
        let filters = FilterSelection::new(selection.month, selection.day);
        let table = filter::filter(&loaded.table, &filters);

        if *format == OutputFormat::Json {
            let summary =
                Core::build_summary(selection.city, &filters, &table, loaded.skipped.len());
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        loaded.warn_skipped(&mut io::stdout())?;
        info(format!(
            "{} of {} trips for {} match {}.",
            table.len(),
            loaded.table.len(),
            selection.city,
            filters
        ));

        let mut out = io::stdout();
        run_reports(&table, &mut out, cfg.show_timing)?;

        if let Some(rows) = raw {
            if table.is_empty() {
                warning("No raw data to show.");
            } else {
                write!(out, "{}", render_rows(&table, 0..*rows))?;
            }
        }
    }
    Ok(())
}
