pub mod error;
pub mod outcome;
pub mod request;

pub use error::GenerationError;
pub use outcome::{ERROR_MARKER, GeneratedEmail, GenerationOutcome};
pub use request::{DecodingParams, GenerationRequest};
