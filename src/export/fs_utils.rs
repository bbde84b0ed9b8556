// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::ui::prompt::Prompter;
use std::io::{BufRead, Write};
use std::path::Path;

/// Controlla che il file di destinazione si possa scrivere.
///
/// - Se il file NON esiste → Ok
/// - Se esiste ed è abilitato `force` → Ok
/// - Se esiste senza `force` → chiede conferma tramite il prompter.
pub(crate) fn ensure_writable<R: BufRead, W: Write>(
    path: &Path,
    force: bool,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if prompter.confirm("Overwrite? [y/N]", false)? == Some(true) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
