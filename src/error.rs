use anyhow::Result as _Result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("No file matching '{pattern}' found in {dir}")]
    NotFound { pattern: String, dir: String },

    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    #[error("Invalid selection '{input}': enter a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("Cannot prompt for {what}: stdin is not a terminal")]
    NotInteractive { what: String },

    #[error("Config Error: {message}")]
    Config { message: String },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inquire Error: {0}")]
    Inquire(#[from] inquire::InquireError),

    #[error("TOML Parse Error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Glob Pattern Match Error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl InstallerError {
    pub fn display_localized(&self) -> String {
        match self {
            InstallerError::NotFound { pattern, dir } => {
                t!("errors.not_found", pattern = pattern, dir = dir).to_string()
            }
            InstallerError::PathNotFound { path } => {
                t!("errors.path_not_found", path = path).to_string()
            }
            InstallerError::InvalidSelection { input, max } => {
                t!("errors.invalid_selection", input = input, max = max).to_string()
            }
            InstallerError::NotInteractive { what } => {
                t!("errors.not_interactive", what = what).to_string()
            }
            InstallerError::Config { message } => {
                t!("errors.config_error", message = message).to_string()
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = _Result<T, InstallerError>;
