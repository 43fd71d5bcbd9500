use thiserror::Error;

/// Error during prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// A custom template file could not be read.
    #[error("Failed to read prompt template {path}: {reason}")]
    TemplateRead { path: String, reason: String },

    /// Failed to render a template with the provided context.
    #[error("Failed to render prompt template {template}: {reason}")]
    TemplateRender { template: String, reason: String },
}
