use std::fmt;

use serde::Serialize;

use crate::domain::dataset::Row;

/// The three sections of a combined record, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Person,
    Company,
    News,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Person, Section::Company, Section::News];

    /// Lowercase identifier, also the JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Person => "person",
            Section::Company => "company",
            Section::News => "news",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many rows matched at each join stage before the first one was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MatchCounts {
    pub profiles: usize,
    pub companies: usize,
    pub news: usize,
}

impl MatchCounts {
    /// True when any stage had to pick among several rows.
    pub fn is_ambiguous(&self) -> bool {
        self.profiles > 1 || self.companies > 1 || self.news > 1
    }
}

/// One person's profile joined with their company's website and news rows.
///
/// All three rows share the same company key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedRecord {
    person: Row,
    company: Row,
    news: Row,
    #[serde(skip)]
    company_key: String,
    #[serde(skip)]
    matches: MatchCounts,
}

impl CombinedRecord {
    pub(crate) fn new(
        person: Row,
        company: Row,
        news: Row,
        company_key: String,
        matches: MatchCounts,
    ) -> Self {
        Self { person, company, news, company_key, matches }
    }

    pub fn person(&self) -> &Row {
        &self.person
    }

    pub fn company(&self) -> &Row {
        &self.company
    }

    pub fn news(&self) -> &Row {
        &self.news
    }

    pub fn section(&self, section: Section) -> &Row {
        match section {
            Section::Person => &self.person,
            Section::Company => &self.company,
            Section::News => &self.news,
        }
    }

    /// Company name the three rows were joined on.
    pub fn company_key(&self) -> &str {
        &self.company_key
    }

    pub fn matches(&self) -> MatchCounts {
        self.matches
    }
}
