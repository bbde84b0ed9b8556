use crate::errors::{AppError, AppResult};
use crate::models::City;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Source file name for each city, relative to `data_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityFiles {
    #[serde(default = "default_chicago_file")]
    pub chicago: String,
    #[serde(default = "default_new_york_city_file")]
    pub new_york_city: String,
    #[serde(default = "default_washington_file")]
    pub washington: String,
}

fn default_chicago_file() -> String {
    "chicago.csv".to_string()
}
fn default_new_york_city_file() -> String {
    "new_york_city.csv".to_string()
}
fn default_washington_file() -> String {
    "washington.csv".to_string()
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: default_chicago_file(),
            new_york_city: default_new_york_city_file(),
            washington: default_washington_file(),
        }
    }
}

impl CityFiles {
    pub fn file_for(&self, city: City) -> &str {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub files: CityFiles,
    #[serde(default = "default_raw_page_size")]
    pub raw_page_size: usize,
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_raw_page_size() -> usize {
    5
}
fn default_show_timing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            files: CityFiles::default(),
            raw_page_size: default_raw_page_size(),
            show_timing: default_show_timing(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.rbikeshare)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rbikeshare")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbikeshare.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        if cfg.raw_page_size == 0 {
            return Err(AppError::Config(
                "raw_page_size must be at least 1".to_string(),
            ));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Full path of the trip file for `city`.
    pub fn city_path(&self, city: City) -> PathBuf {
        expand_tilde(&self.data_dir).join(self.files.file_for(city))
    }

    /// Write a default configuration file unless one already exists.
    /// Returns the path and whether it was created.
    pub fn init_file() -> AppResult<(PathBuf, bool)> {
        let path = Self::config_file();
        if path.exists() {
            return Ok((path, false));
        }

        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = Config::default().to_yaml()?;
        fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok((path, true))
    }
}
