pub mod configuration;
pub mod credentials;
pub mod dataset;
pub mod error;
pub mod generation;
pub mod join;
pub mod prompt;

pub use configuration::{AppConfig, DataConfig, GenerationConfig};
pub use credentials::{API_KEY_ENV_VARS, ApiKey, Credentials};
pub use dataset::{Datasets, LoadError, Row, Table, TableKind, load_datasets};
pub use error::AppError;
pub use generation::{
    DecodingParams, ERROR_MARKER, GeneratedEmail, GenerationError, GenerationOutcome,
    GenerationRequest,
};
pub use join::{CombinedRecord, JoinStage, MatchCounts, NotFoundError, Section, resolve};
pub use prompt::{PromptError, PromptTemplate, assemble};
