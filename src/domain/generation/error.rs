use thiserror::Error;

/// Why a generation request produced no text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request never got a response (DNS, connect, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The API key was rejected.
    #[error("authentication failed ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Quota exhausted or rate limited.
    #[error("quota exceeded (429): {message}")]
    RateLimited { message: String },

    /// Any other non-success status.
    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The prompt or the candidate was blocked by content policy.
    #[error("blocked by content policy: {reason}")]
    Blocked { reason: String },

    /// The response carried no candidate text.
    #[error("service returned no text")]
    EmptyResponse,

    /// The response body could not be decoded.
    #[error("unreadable response: {0}")]
    InvalidResponse(String),

    /// The worker running the request stopped before reporting back.
    #[error("generation worker stopped before reporting a result")]
    WorkerLost,
}
