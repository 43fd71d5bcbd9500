use std::fmt;

use super::error::GenerationError;

/// Prefix of the text shown in place of an email when generation fails.
pub const ERROR_MARKER: &str = "Error generating email:";

/// Result of one generation request, kept typed until it is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success(String),
    Failure(GenerationError),
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success(_))
    }

    /// Fold the outcome into displayable text.
    ///
    /// Successful text passes through untouched; failures become
    /// `Error generating email: <reason>`.
    pub fn render(self) -> GeneratedEmail {
        match self {
            GenerationOutcome::Success(text) => GeneratedEmail { text, failed: false },
            GenerationOutcome::Failure(err) => {
                GeneratedEmail { text: format!("{ERROR_MARKER} {err}"), failed: true }
            }
        }
    }
}

impl From<Result<String, GenerationError>> for GenerationOutcome {
    fn from(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(text) => GenerationOutcome::Success(text),
            Err(err) => GenerationOutcome::Failure(err),
        }
    }
}

/// Text produced for one request: the email, or the folded error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEmail {
    text: String,
    failed: bool,
}

impl GeneratedEmail {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// True when the text is an error message rather than model output.
    pub fn is_error(&self) -> bool {
        self.failed
    }
}

impl fmt::Display for GeneratedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
