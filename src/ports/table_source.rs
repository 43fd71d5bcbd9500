//! Source table storage port.

use crate::domain::{LoadError, TableKind};

/// Port for reading raw CSV text of the source tables.
pub trait TableSource {
    /// Read the table stored under `file`.
    ///
    /// A missing file is [`LoadError::Missing`]; any other read failure is
    /// [`LoadError::Unreadable`].
    fn read_table(&self, table: TableKind, file: &str) -> Result<String, LoadError>;
}
