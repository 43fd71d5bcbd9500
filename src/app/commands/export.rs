use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{AppError, GeneratedEmail};

/// Write the email text to `path`, creating parent directories as needed.
pub fn execute(email: &GeneratedEmail, path: &Path) -> Result<PathBuf, AppError> {
    let export_error = |source: io::Error| AppError::Export { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(export_error)?;
    }
    fs::write(path, email.as_str()).map_err(export_error)?;

    info!(path = %path.display(), bytes = email.as_str().len(), "saved generated email");
    Ok(path.to_path_buf())
}
