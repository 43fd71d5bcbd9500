//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::domain::{AppError, Credentials, GenerationConfig, GenerationError, GenerationRequest};
use crate::ports::GenerationClient;

use super::wire::{GenerateContentRequest, GenerateContentResponse, error_message};

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// HTTP client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct HttpGeminiClient {
    credentials: Credentials,
    endpoint: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a client for the configured model using the session's credentials.
    pub fn new(credentials: Credentials, config: &GenerationConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            credentials,
            endpoint: endpoint_url(&config.api_url, &config.model)?,
            model: config.model.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `{api_url}/models/{model}:generateContent`
fn endpoint_url(api_url: &Url, model: &str) -> Result<Url, AppError> {
    let mut url = api_url.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::config_error(format!("Invalid API base URL: {}", api_url)))?
        .pop_if_empty()
        .push("models")
        .push(&format!("{model}:generateContent"));
    Ok(url)
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let body = GenerateContentRequest::new(&request.prompt, &request.params);
        debug!(model = %self.model, prompt_chars = request.prompt.chars().count(), "sending generation request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, self.credentials.api_key().expose())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "generation response received");

        if status.is_success() {
            let parsed: GenerateContentResponse = response
                .json()
                .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;
            return parsed.into_text();
        }

        let message = failure_message(status, response.text());
        Err(classify_failure(status, message))
    }
}

fn failure_message<E: std::fmt::Display>(status: StatusCode, body: Result<String, E>) -> String {
    match body {
        Ok(raw) => error_message(&raw, status.canonical_reason().unwrap_or("Unknown error")),
        Err(e) => format!("<unreadable body: {e}>"),
    }
}

fn classify_failure(status: StatusCode, message: String) -> GenerationError {
    let code = status.as_u16();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GenerationError::Unauthorized { status: code, message }
        }
        // Gemini reports an invalid key as 400 INVALID_ARGUMENT.
        StatusCode::BAD_REQUEST if message.contains("API key") => {
            GenerationError::Unauthorized { status: code, message }
        }
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited { message },
        _ => GenerationError::Service { status: code, message },
    }
}
