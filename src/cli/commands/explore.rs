use crate::config::Config;
use crate::errors::AppResult;
use crate::shell;
use std::io;

/// Handle the `explore` command (also the default without a command)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    shell::run(cfg, stdin.lock(), io::stdout())
}
