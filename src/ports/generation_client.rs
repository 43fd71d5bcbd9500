//! Text generation port definition.

use crate::domain::{GenerationError, GenerationRequest};

/// Port for the hosted text-generation service.
///
/// Implementations hold their own credentials and send exactly one request
/// per call: no retries, no streaming.
pub trait GenerationClient {
    /// Send the prompt and return the produced text verbatim.
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

impl<T: GenerationClient + ?Sized> GenerationClient for std::sync::Arc<T> {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        (**self).generate(request)
    }
}

impl<T: GenerationClient + ?Sized> GenerationClient for Box<T> {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        (**self).generate(request)
    }
}
