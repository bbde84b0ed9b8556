//! Interactive session: ask, load, filter, report, repeat.
//!
//! A thin driver over the core functions. Nothing is carried from one cycle
//! to the next except the configuration.

pub mod filters;
pub mod raw;

use crate::config::Config;
use crate::core::stats::run_reports;
use crate::core::{filter, loader};
use crate::errors::AppResult;
use crate::ui::messages::{write_error, write_info};
use crate::ui::prompt::Prompter;
use filters::Request;
use std::io::{BufRead, Write};

/// Run the prompt loop until the user declines to restart or the input ends.
pub fn run<R: BufRead, W: Write>(cfg: &Config, input: R, output: W) -> AppResult<()> {
    let mut prompter = Prompter::new(input, output);
    writeln!(prompter.output(), "Hello! Let's explore some US bikeshare data!")?;

    loop {
        let Some(request) = filters::get_filters(&mut prompter)? else {
            break;
        };

        run_cycle(cfg, &request, &mut prompter)?;

        if prompter.confirm("\nWould you like to restart? Enter yes or no.", false)? != Some(true) {
            break;
        }
    }

    writeln!(prompter.output(), "Bye!")?;
    Ok(())
}

/// One load → filter → report round. A data file that cannot be loaded ends
/// the round with an error message, not the session.
fn run_cycle<R: BufRead, W: Write>(
    cfg: &Config,
    request: &Request,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()> {
    let out = prompter.output();
    let loaded = match loader::load(request.city, cfg) {
        Ok(loaded) => loaded,
        Err(e) => {
            write_error(out, e)?;
            return Ok(());
        }
    };

    loaded.warn_skipped(out)?;
    write_info(
        out,
        format!("Loaded {} trips for {}.", loaded.table.len(), request.city),
    )?;

    let table = filter::filter(&loaded.table, &request.selection);
    if !request.selection.is_all() {
        write_info(
            out,
            format!("{} trips match {}.", table.len(), request.selection),
        )?;
    }

    run_reports(&table, out, cfg.show_timing)?;

    if table.is_empty() {
        return Ok(());
    }

    if prompter.confirm("\nWould you like to see the raw data? Enter yes or no.", false)? == Some(true) {
        raw::paginate(&table, cfg.raw_page_size, prompter)?;
    }

    Ok(())
}
