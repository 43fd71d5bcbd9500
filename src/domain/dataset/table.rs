//! In-memory tables parsed from CSV sources.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::error::LoadError;

/// The three source tables the joiner works across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Professional profiles, one row per person.
    Profiles,
    /// Company website summaries, one row per company.
    Companies,
    /// Company news items.
    News,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Profiles, TableKind::Companies, TableKind::News];

    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Profiles => "profiles",
            TableKind::Companies => "companies",
            TableKind::News => "news",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One record of a table: column names paired with cell text, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of the first column named `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.iter().find(|(name, _)| name == column).map(|(_, value)| value.as_str())
    }

    /// Fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// Serialized as a map so JSON output keeps the source column order.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A parsed source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    kind: TableKind,
    key_column: String,
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Parse CSV text with a header row.
    ///
    /// `key_column` and every entry of `required_columns` must appear in the
    /// header. Cell values are kept verbatim.
    pub fn from_csv(
        kind: TableKind,
        key_column: &str,
        required_columns: &[&str],
        content: &str,
    ) -> Result<Self, LoadError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::None)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|err| LoadError::Malformed { table: kind, reason: err.to_string() })?
            .iter()
            .map(str::to_string)
            .collect();

        for column in std::iter::once(&key_column).chain(required_columns) {
            if !headers.iter().any(|header| header == column) {
                return Err(LoadError::MissingColumn { table: kind, column: column.to_string() });
            }
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|err| LoadError::Malformed { table: kind, reason: err.to_string() })?;
            rows.push(Row::new(
                headers.iter().cloned().zip(record.iter().map(str::to_string)).collect(),
            ));
        }

        Ok(Self { kind, key_column: key_column.to_string(), headers, rows })
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose `column` equals `value`, in table order.
    pub fn matching<'a>(&'a self, column: &'a str, value: &'a str) -> impl Iterator<Item = &'a Row> {
        self.rows.iter().filter(move |row| row.get(column) == Some(value))
    }

    /// Rows whose key column equals `value`, in table order.
    pub fn matching_key<'a>(&'a self, value: &'a str) -> impl Iterator<Item = &'a Row> {
        self.matching(&self.key_column, value)
    }

    /// Key column values in table order.
    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().filter_map(|row| row.get(&self.key_column)).collect()
    }
}
