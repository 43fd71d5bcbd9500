use std::collections::HashMap;

use crate::domain::{LoadError, TableKind};
use crate::ports::TableSource;

/// In-memory table source for testing. Tables are keyed by kind; the file
/// name passed by the loader is ignored.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableSource {
    tables: HashMap<TableKind, String>,
}

impl MemoryTableSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, kind: TableKind, content: impl Into<String>) -> Self {
        self.tables.insert(kind, content.into());
        self
    }
}

impl TableSource for MemoryTableSource {
    fn read_table(&self, table: TableKind, file: &str) -> Result<String, LoadError> {
        self.tables
            .get(&table)
            .cloned()
            .ok_or_else(|| LoadError::Missing { table, path: file.to_string() })
    }
}
