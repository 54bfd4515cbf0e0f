//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, XML, JSON and extraction errors, and provides semantic
//! variants for input validation.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Extract(#[from] crate::io::ExtractError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input {}: {reason}", .path.display())]
    InvalidInput { path: PathBuf, reason: &'static str },

    #[error("Malformed report: {0}")]
    MalformedReport(String),
}

impl Error {
    pub fn invalid_input(path: impl Into<PathBuf>, reason: &'static str) -> Self {
        Error::InvalidInput {
            path: path.into(),
            reason,
        }
    }
}
