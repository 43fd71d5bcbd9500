use thiserror::Error;

use super::TableKind;

/// Failure to bring one of the source tables into memory.
///
/// Any single failure aborts the whole load; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("{table} source not found: {path}")]
    Missing { table: TableKind, path: String },

    /// The source exists but could not be read as UTF-8 text.
    #[error("failed to read {table} source {path}: {reason}")]
    Unreadable { table: TableKind, path: String, reason: String },

    /// The source is not well-formed CSV.
    #[error("malformed {table} table: {reason}")]
    Malformed { table: TableKind, reason: String },

    /// A required key column is absent from the header row.
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn { table: TableKind, column: String },
}

impl LoadError {
    /// Table the failure belongs to.
    pub fn table(&self) -> TableKind {
        match self {
            LoadError::Missing { table, .. }
            | LoadError::Unreadable { table, .. }
            | LoadError::Malformed { table, .. }
            | LoadError::MissingColumn { table, .. } => *table,
        }
    }
}
