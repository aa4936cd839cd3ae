//! Error types for the NBA projection CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid season '{season}': expected YYYY-YY (e.g. 2022-23)")]
    InvalidSeason { season: String },

    #[error("Invalid roster entry '{entry}': expected NAME or NAME:TEAM")]
    InvalidRosterEntry { entry: String },

    #[error("Chart error: {message}")]
    Chart { message: String },
}
