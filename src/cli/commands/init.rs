use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command: write `~/.rbikeshare/rbikeshare.conf` with defaults.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (path, created) = Config::init_file()?;

    if created {
        success(format!("Config file created: {}", path.display()));
    } else {
        warning(format!(
            "Config file already exists, left untouched: {}",
            path.display()
        ));
    }

    for city in crate::models::City::ALL {
        let data = cfg.city_path(city);
        if data.exists() {
            info(format!("{city}: {}", data.display()));
        } else {
            warning(format!("{city}: {} (missing)", data.display()));
        }
    }

    Ok(())
}
