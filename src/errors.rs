//! Unified application error type.
//! All modules (core, shell, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Dataset errors
    // ---------------------------
    #[error("Data for {city} is not available ({}): {source}", .path.display())]
    DataUnavailable {
        city: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing required column '{0}' in trip data")]
    MissingHeader(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid city: {0} (expected chicago, new york city or washington)")]
    InvalidCity(String),

    #[error("Invalid month: {0} (expected all or january - june)")]
    InvalidMonth(String),

    #[error("Invalid weekday: {0} (expected all or monday - sunday)")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
