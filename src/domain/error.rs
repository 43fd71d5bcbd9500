use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::dataset::LoadError;
use crate::domain::join::NotFoundError;
use crate::domain::prompt::PromptError;

/// Library-wide error type for outreach operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file passed explicitly does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("Config parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// One of the source tables could not be loaded.
    #[error("Could not load data: {0}")]
    Load(#[from] LoadError),

    /// A join stage found no matching row.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Generation requested without instructions.
    #[error("Please enter a prompt for email generation.")]
    EmptyInstructions,

    /// No usable API key was supplied.
    #[error("API key not configured. Set OUTREACH_API_KEY or GOOGLE_API_KEY, or enter one when prompted.")]
    MissingCredentials,

    /// Prompt template could not be read or rendered.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Terminal interaction failed.
    #[error("{0}")]
    Interaction(String),

    /// Writing the generated email to disk failed.
    #[error("Failed to write email to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether an interactive session can continue after this error.
    ///
    /// Lookups that miss and empty submissions send the user back to the
    /// selection step; everything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::EmptyInstructions | AppError::Export { .. }
        )
    }
}
