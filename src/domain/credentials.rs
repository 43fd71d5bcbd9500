//! API credentials for the generation service.

use std::fmt;

use crate::domain::AppError;

/// Environment variables checked for an API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["OUTREACH_API_KEY", "GOOGLE_API_KEY"];

/// An API key. Never shown in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Surrounding whitespace is dropped; an empty key is rejected.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, AppError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AppError::MissingCredentials);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Credentials for one session, created when the key is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: ApiKey,
}

impl Credentials {
    pub fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    pub fn from_key(raw: impl AsRef<str>) -> Result<Self, AppError> {
        Ok(Self::new(ApiKey::new(raw)?))
    }

    /// First non-empty key among [`API_KEY_ENV_VARS`].
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find_map(|raw| Self::from_key(raw).ok())
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}
