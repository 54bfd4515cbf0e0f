use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Invalid extension: {extension:?}. Must contain at least one character besides '.'")]
    InvalidExtension { extension: String },
}
