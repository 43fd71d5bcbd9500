use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::domain::dataset::{Datasets, Row, Table};

use super::record::{CombinedRecord, MatchCounts};

/// Join stage at which a lookup can come up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStage {
    Profile,
    Company,
    News,
}

impl fmt::Display for JoinStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JoinStage::Profile => "profile",
            JoinStage::Company => "company",
            JoinStage::News => "news",
        })
    }
}

/// No row matched at `stage`.
///
/// `key` is the person identifier for the profile stage and the company name
/// for the other two.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No {stage} record found for '{key}'")]
pub struct NotFoundError {
    pub stage: JoinStage,
    pub key: String,
}

impl NotFoundError {
    pub fn new(stage: JoinStage, key: impl Into<String>) -> Self {
        Self { stage, key: key.into() }
    }
}

/// Resolve `person` into a combined record.
///
/// Each stage takes the first matching row in table order.
pub fn resolve(person: &str, datasets: &Datasets) -> Result<CombinedRecord, NotFoundError> {
    let (profile, profiles) = first_match(&datasets.profiles, person)
        .ok_or_else(|| NotFoundError::new(JoinStage::Profile, person))?;

    // Key column presence is checked at load time, so a missing employer cell
    // can only come from a row shorter than the header; treat it as empty.
    let company_key = profile.get(datasets.employer_column()).unwrap_or_default();

    let (company, companies) = first_match(&datasets.companies, company_key)
        .ok_or_else(|| NotFoundError::new(JoinStage::Company, company_key))?;
    let (news, news_count) = first_match(&datasets.news, company_key)
        .ok_or_else(|| NotFoundError::new(JoinStage::News, company_key))?;

    let matches = MatchCounts { profiles, companies, news: news_count };
    if matches.is_ambiguous() {
        warn!(
            person,
            company = company_key,
            profiles,
            companies,
            news = news_count,
            "multiple rows matched; using the first of each"
        );
    }

    Ok(CombinedRecord::new(
        profile.clone(),
        company.clone(),
        news.clone(),
        company_key.to_string(),
        matches,
    ))
}

/// A blank key is a missing value and never matches, not even a blank cell.
fn first_match<'a>(table: &'a Table, key: &'a str) -> Option<(&'a Row, usize)> {
    if key.is_empty() {
        return None;
    }
    let mut rows = table.matching_key(key);
    let first = rows.next()?;
    Some((first, 1 + rows.count()))
}
