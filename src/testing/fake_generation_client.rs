use std::sync::{Arc, Mutex};

use crate::domain::{GenerationError, GenerationRequest};
use crate::ports::GenerationClient;

/// Generation client that records requests and replays a fixed reply.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    reply: Result<String, GenerationError>,
}

impl FakeGenerationClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Ok(text.into()) }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Err(error) }
    }

    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}
