//! outreach: draft personalized outreach emails by joining profile, company,
//! and news tables and handing the combined record to a hosted language model.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::AppContext;
pub use app::api::{
    OpenOptions, PersonSummary, PersonView, Workspace, export_email, generate_email, list_people,
    open, open_at, preview_prompt, show_person,
};
pub use domain::{
    AppConfig, AppError, CombinedRecord, Credentials, ERROR_MARKER, GeneratedEmail, MatchCounts,
};
