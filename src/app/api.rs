//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::{FilesystemTableSource, HttpGeminiClient};
use crate::app::{
    AppContext,
    commands::{export, generate, people, prompt, show},
};
use crate::domain::configuration::{load_config, resolve_path};
use crate::ports::TableSource;

pub use crate::app::commands::show::{PersonSummary, PersonView};
pub use crate::domain::{AppConfig, AppError, Credentials, Datasets, GeneratedEmail};

/// Context whose tables are CSV files on disk.
pub type Workspace = AppContext<FilesystemTableSource>;

/// Where to look for configuration and data.
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// Config file to load instead of `outreach.toml` in the root.
    pub config: Option<PathBuf>,
    /// Data directory overriding `[data].dir`.
    pub data_dir: Option<PathBuf>,
}

/// Open a workspace rooted at the current directory.
pub fn open(options: &OpenOptions) -> Result<Workspace, AppError> {
    open_at(std::env::current_dir()?, options)
}

/// Open a workspace rooted at `root`.
///
/// Relative config, data, and template paths resolve against `root`.
pub fn open_at(root: impl Into<PathBuf>, options: &OpenOptions) -> Result<Workspace, AppError> {
    let root = root.into();
    let mut config = load_config(options.config.as_deref(), &root)?;
    if let Some(dir) = &options.data_dir {
        config.data.dir = dir.clone();
    }

    let data_dir = resolve_path(&root, &config.data.dir);
    Ok(AppContext::new(config, root, FilesystemTableSource::new(data_dir)))
}

/// Names in the profile table, in file order.
pub fn list_people<S: TableSource>(ctx: &AppContext<S>) -> Result<Vec<String>, AppError> {
    let datasets = ctx.load_datasets()?;
    Ok(people::execute(&datasets))
}

/// Joined profile, company, and news records for `person`.
pub fn show_person<S: TableSource>(ctx: &AppContext<S>, person: &str) -> Result<PersonView, AppError> {
    let datasets = ctx.load_datasets()?;
    show::execute(&datasets, person)
}

/// The prompt that would be sent for `person`, without contacting the service.
pub fn preview_prompt<S: TableSource>(
    ctx: &AppContext<S>,
    person: &str,
    instructions: &str,
) -> Result<String, AppError> {
    let datasets = ctx.load_datasets()?;
    prompt::execute(ctx, &datasets, person, instructions)
}

/// Generate an email for `person` with the configured service.
///
/// Service failures are folded into the returned text; see
/// [`GeneratedEmail::is_error`].
pub fn generate_email<S: TableSource>(
    ctx: &AppContext<S>,
    credentials: Credentials,
    person: &str,
    instructions: &str,
) -> Result<GeneratedEmail, AppError> {
    let datasets = ctx.load_datasets()?;
    let client = Arc::new(HttpGeminiClient::new(credentials, &ctx.config().generation)?);
    generate::execute(ctx, client, &datasets, person, instructions)
}

/// Save the email text to `path`.
pub fn export_email(email: &GeneratedEmail, path: &Path) -> Result<PathBuf, AppError> {
    export::execute(email, path)
}
