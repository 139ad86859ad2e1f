//! API Errors
//!
//! Transport failures and non-2xx responses are kept apart so callers can log
//! them differently, but the reorder flow treats both the same way.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS, ...)
    #[error("transport error: {0}")]
    Transport(String),
    /// Backend answered with a non-2xx status
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Response body did not match the expected shape
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_builder() {
            ApiError::InvalidUrl(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status { status: status.as_u16(), body: String::new() }
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
