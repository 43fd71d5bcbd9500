use tracing::debug;

use crate::domain::configuration::DataConfig;
use crate::ports::TableSource;

use super::error::LoadError;
use super::table::{Table, TableKind};

/// The three source tables, loaded together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datasets {
    pub profiles: Table,
    pub companies: Table,
    pub news: Table,
    employer_column: String,
}

impl Datasets {
    pub fn new(profiles: Table, employer_column: impl Into<String>, companies: Table, news: Table) -> Self {
        Self { profiles, companies, news, employer_column: employer_column.into() }
    }

    /// Profile column holding the company name used as join key.
    pub fn employer_column(&self) -> &str {
        &self.employer_column
    }

    /// Person identifiers in profile-table order.
    pub fn people(&self) -> Vec<&str> {
        self.profiles.keys()
    }

    pub fn table(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::Profiles => &self.profiles,
            TableKind::Companies => &self.companies,
            TableKind::News => &self.news,
        }
    }
}

/// Load all three tables from `source`.
///
/// Fails on the first table that is missing, unreadable, malformed, or lacks
/// its key column.
pub fn load_datasets(source: &impl TableSource, config: &DataConfig) -> Result<Datasets, LoadError> {
    let profiles = load_table(
        source,
        TableKind::Profiles,
        &config.profiles.file,
        &config.profiles.key_column,
        &[config.profiles.employer_column.as_str()],
    )?;
    let companies = load_table(
        source,
        TableKind::Companies,
        &config.companies.file,
        &config.companies.key_column,
        &[],
    )?;
    let news =
        load_table(source, TableKind::News, &config.news.file, &config.news.key_column, &[])?;

    Ok(Datasets::new(profiles, config.profiles.employer_column.clone(), companies, news))
}

fn load_table(
    source: &impl TableSource,
    kind: TableKind,
    file: &str,
    key_column: &str,
    required_columns: &[&str],
) -> Result<Table, LoadError> {
    let content = source.read_table(kind, file)?;
    let table = Table::from_csv(kind, key_column, required_columns, &content)?;
    debug!(table = %kind, file, rows = table.len(), "loaded table");
    Ok(table)
}
