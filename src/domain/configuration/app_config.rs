//! Application configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::dataset::TableKind;

/// Configuration loaded from `outreach.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Source table locations and key columns.
    #[serde(default)]
    pub data: DataConfig,
    /// Generation service endpoint.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Prompt template override.
    #[serde(default)]
    pub prompt: PromptConfig,
    /// Export settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.data.validate()?;
        self.generation.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Where the three CSV tables live and which columns join them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Directory holding the CSV files, relative to the working directory.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub profiles: ProfilesTableConfig,
    #[serde(default)]
    pub companies: CompaniesTableConfig,
    #[serde(default)]
    pub news: NewsTableConfig,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            profiles: ProfilesTableConfig::default(),
            companies: CompaniesTableConfig::default(),
            news: NewsTableConfig::default(),
        }
    }
}

impl DataConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for kind in TableKind::ALL {
            let (file, key_column) = self.table(kind);
            require_non_empty(&format!("data.{kind}.file"), file)?;
            require_non_empty(&format!("data.{kind}.key_column"), key_column)?;
        }
        require_non_empty("data.profiles.employer_column", &self.profiles.employer_column)
    }

    /// File name and key column for `kind`.
    pub fn table(&self, kind: TableKind) -> (&str, &str) {
        match kind {
            TableKind::Profiles => (&self.profiles.file, &self.profiles.key_column),
            TableKind::Companies => (&self.companies.file, &self.companies.key_column),
            TableKind::News => (&self.news.file, &self.news.key_column),
        }
    }
}

/// Profile table: one row per person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilesTableConfig {
    #[serde(default = "default_profiles_file")]
    pub file: String,
    /// Person identifier column.
    #[serde(default = "default_profiles_key")]
    pub key_column: String,
    /// Column naming the person's company.
    #[serde(default = "default_employer_column")]
    pub employer_column: String,
}

impl Default for ProfilesTableConfig {
    fn default() -> Self {
        Self {
            file: default_profiles_file(),
            key_column: default_profiles_key(),
            employer_column: default_employer_column(),
        }
    }
}

/// Company table: one row per company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompaniesTableConfig {
    #[serde(default = "default_companies_file")]
    pub file: String,
    #[serde(default = "default_companies_key")]
    pub key_column: String,
}

impl Default for CompaniesTableConfig {
    fn default() -> Self {
        Self { file: default_companies_file(), key_column: default_companies_key() }
    }
}

/// News table: company news items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewsTableConfig {
    #[serde(default = "default_news_file")]
    pub file: String,
    #[serde(default = "default_news_key")]
    pub key_column: String,
}

impl Default for NewsTableConfig {
    fn default() -> Self {
        Self { file: default_news_file(), key_column: default_news_key() }
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Versioned API base, without the `models/...` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds. The HTTP client default applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: None }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("generation.model", &self.model)?;
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("generation.timeout_secs must be greater than 0"));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "generation.api_url must be a base URL: {}",
                self.api_url
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    /// Path to a minijinja template replacing the built-in email prompt.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// File name used when saving a generated email.
    #[serde(default = "default_output_file")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { file_name: default_output_file() }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("output.file_name", &self.file_name)
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{field} must not be empty")));
    }
    Ok(())
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_profiles_file() -> String {
    "linkedin_data.csv".to_string()
}

fn default_profiles_key() -> String {
    "name".to_string()
}

fn default_employer_column() -> String {
    "company".to_string()
}

fn default_companies_file() -> String {
    "website_data.csv".to_string()
}

fn default_companies_key() -> String {
    "company_name".to_string()
}

fn default_news_file() -> String {
    "news_data.csv".to_string()
}

fn default_news_key() -> String {
    "related_company".to_string()
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_output_file() -> String {
    "generated_email.txt".to_string()
}
