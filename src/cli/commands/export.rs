use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{filter, loader};
use crate::errors::AppResult;
use crate::export::export_table;
use crate::models::FilterSelection;
use crate::ui::prompt::Prompter;
use crate::utils::path::expand_tilde;
use std::io;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        selection,
        format,
        file,
        force,
    } = cmd
    {
        let loaded = loader::load(selection.city, cfg)?;
        loaded.warn_skipped(&mut io::stdout())?;

        let filters = FilterSelection::new(selection.month, selection.day);
        let table = filter::filter(&loaded.table, &filters);

        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        export_table(&table, *format, &expand_tilde(file), *force, &mut prompter)?;
    }
    Ok(())
}
