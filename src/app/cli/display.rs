use serde::Serialize;

use crate::app::commands::show::{PersonSummary, PersonView};
use crate::domain::{AppError, CombinedRecord, GeneratedEmail, MatchCounts, Section};

pub fn format_summary(summary: &PersonSummary) -> String {
    let mut out = format!("{}\n", summary.name);
    if let Some(title) = &summary.title {
        out.push_str(&format!("  Title:    {}\n", title));
    }
    out.push_str(&format!("  Company:  {}\n", summary.company));
    if let Some(location) = &summary.location {
        out.push_str(&format!("  Location: {}\n", location));
    }
    if let Some(about) = &summary.about {
        out.push_str(&format!("  About:    {}\n", about));
    }
    out
}

/// Each section as a pretty JSON object under a `[section]` heading.
pub fn format_record(record: &CombinedRecord) -> Result<String, AppError> {
    let mut out = String::new();
    for section in Section::ALL {
        out.push_str(&format!("\n[{}]\n{}\n", section, to_json(record.section(section))?));
    }
    Ok(out)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Interaction(format!("Failed to encode record: {}", err)))
}

/// Note shown when a lookup matched more than one row.
pub fn ambiguity_note(matches: MatchCounts) -> Option<String> {
    matches.is_ambiguous().then(|| {
        format!(
            "⚠️  Multiple rows matched (profiles: {}, companies: {}, news: {}); using the first of each.",
            matches.profiles, matches.companies, matches.news
        )
    })
}

pub fn print_person(view: &PersonView) -> Result<(), AppError> {
    print!("{}", format_summary(&view.summary));
    print!("{}", format_record(&view.record)?);
    if let Some(note) = ambiguity_note(view.record.matches()) {
        eprintln!("{}", note);
    }
    Ok(())
}

pub fn print_person_json(view: &PersonView) -> Result<(), AppError> {
    println!("{}", to_json(&view.record)?);
    Ok(())
}

pub fn print_email(email: &GeneratedEmail) {
    if email.is_error() {
        eprintln!("⚠️  Generation failed");
    }
    println!("{}", email);
}
