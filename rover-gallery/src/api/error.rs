use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a photo API call. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP error {0}")]
    Status(StatusCode),

    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}
