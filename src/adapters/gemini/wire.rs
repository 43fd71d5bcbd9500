//! Gemini `generateContent` request and response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::{DecodingParams, GenerationError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    pub(super) fn new(prompt: &'a str, params: &DecodingParams) -> Self {
        Self {
            contents: [Content { role: "user", parts: [Part { text: prompt }] }],
            generation_config: GenerationConfig {
                temperature: params.temperature,
                top_p: params.top_p,
                top_k: params.top_k,
                max_output_tokens: params.max_output_tokens,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Finish reasons that mean the candidate was withheld.
const BLOCKING_FINISH_REASONS: [&str; 5] =
    ["SAFETY", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII", "RECITATION"];

impl GenerateContentResponse {
    /// Text of the first candidate, its parts concatenated.
    pub(super) fn into_text(self) -> Result<String, GenerationError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return match self.prompt_feedback.and_then(|feedback| feedback.block_reason) {
                Some(reason) => Err(GenerationError::Blocked { reason }),
                None => Err(GenerationError::EmptyResponse),
            };
        };

        let text: Option<String> = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect());

        match (text, candidate.finish_reason) {
            (Some(text), _) if !text.is_empty() => Ok(text),
            (_, Some(reason)) if BLOCKING_FINISH_REASONS.contains(&reason.as_str()) => {
                Err(GenerationError::Blocked { reason })
            }
            _ => Err(GenerationError::EmptyResponse),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Human-readable message from an error response body.
pub(super) fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if !parsed.error.message.is_empty() {
            return parsed.error.message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { fallback.to_string() } else { trimmed.to_string() }
}
