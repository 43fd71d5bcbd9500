//! `TableSource` backed by CSV files in a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{LoadError, TableKind};
use crate::ports::TableSource;

/// Reads source tables from files under `root`.
#[derive(Debug, Clone)]
pub struct FilesystemTableSource {
    root: PathBuf,
}

impl FilesystemTableSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TableSource for FilesystemTableSource {
    fn read_table(&self, table: TableKind, file: &str) -> Result<String, LoadError> {
        let path = self.root.join(file);
        fs::read_to_string(&path).map_err(|err| {
            let path = path.display().to_string();
            match err.kind() {
                ErrorKind::NotFound => LoadError::Missing { table, path },
                _ => LoadError::Unreadable { table, path, reason: err.to_string() },
            }
        })
    }
}
