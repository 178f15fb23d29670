//! Error types for the DFS lineup optimizer

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid league: {league} (expected NFL or NBA)")]
    InvalidLeague { league: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid salary cap: {value} (must be a positive number)")]
    InvalidSalaryCap { value: String },

    #[error("Projection source unavailable ({source_name}): {message}")]
    UpstreamUnavailable {
        source_name: String,
        message: String,
    },

    #[error("Solver failed: {message}")]
    Solver { message: String },
}
