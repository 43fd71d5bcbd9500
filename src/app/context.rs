use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::resolve_path;
use crate::domain::{AppConfig, AppError, Datasets, PromptError, PromptTemplate, load_datasets};
use crate::ports::TableSource;

/// Application context holding configuration and the table source.
pub struct AppContext<S: TableSource> {
    config: AppConfig,
    root: PathBuf,
    tables: S,
}

impl<S: TableSource> AppContext<S> {
    /// Create a new application context.
    ///
    /// Relative paths in `config` resolve against `root`.
    pub fn new(config: AppConfig, root: impl Into<PathBuf>, tables: S) -> Self {
        Self { config, root: root.into(), tables }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a reference to the table source.
    pub fn tables(&self) -> &S {
        &self.tables
    }

    /// Load all three source tables.
    pub fn load_datasets(&self) -> Result<Datasets, AppError> {
        Ok(load_datasets(&self.tables, &self.config.data)?)
    }

    /// The configured prompt template, or the built-in one.
    pub fn prompt_template(&self) -> Result<PromptTemplate, AppError> {
        let Some(template) = &self.config.prompt.template else {
            return Ok(PromptTemplate::builtin());
        };
        let path = resolve_path(&self.root, template);
        let source = fs::read_to_string(&path).map_err(|err| PromptError::TemplateRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Ok(PromptTemplate::new(template.display().to_string(), source))
    }

    /// Default location for a saved email.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.config.output.file_name)
    }
}
