//! API client errors

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure talking to the remote API.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error payload.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// A 2xx answer whose body is not the shape this client requires.
    #[error("unexpected response shape from the remote API")]
    UnexpectedShape,
}
