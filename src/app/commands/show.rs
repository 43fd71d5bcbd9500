use serde::Serialize;

use crate::domain::{AppError, CombinedRecord, Datasets, Row, resolve};

/// Headline fields shown before the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSummary {
    pub name: String,
    pub title: Option<String>,
    pub company: String,
    pub location: Option<String>,
    pub about: Option<String>,
}

impl PersonSummary {
    fn from_profile(profile: &Row, name: &str, company: &str) -> Self {
        let field = |column: &str| profile.get(column).filter(|v| !v.is_empty()).map(str::to_string);
        Self {
            name: name.to_string(),
            title: field("title"),
            company: company.to_string(),
            location: field("location"),
            about: field("about"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PersonView {
    pub summary: PersonSummary,
    pub record: CombinedRecord,
}

pub fn execute(datasets: &Datasets, person: &str) -> Result<PersonView, AppError> {
    let record = resolve(person, datasets)?;
    let summary = PersonSummary::from_profile(record.person(), person, record.company_key());
    Ok(PersonView { summary, record })
}
