/// Sampling settings sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodingParams {
    pub temperature: f32,
    /// Nucleus sampling threshold.
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl DecodingParams {
    pub const EMAIL: DecodingParams =
        DecodingParams { temperature: 0.7, top_p: 0.95, top_k: 40, max_output_tokens: 1024 };
}

impl Default for DecodingParams {
    fn default() -> Self {
        Self::EMAIL
    }
}

/// One prompt to send to the generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub params: DecodingParams,
}

impl GenerationRequest {
    /// Request with the fixed email decoding parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), params: DecodingParams::EMAIL }
    }
}
