use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviewError>;

/// Errors from talking to the review service.
///
/// Any of these aborts the whole review batch.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid base64 body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response from {url}: expected {expected}")]
    UnexpectedBody { url: String, expected: &'static str },

    #[error("failed to start review worker pool: {message}")]
    Pool { message: String },

    #[error("invalid diff pattern: {0}")]
    Pattern(#[from] regex::Error),
}
