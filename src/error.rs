//! Error types for card rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while resolving or rendering a card.
///
/// Every variant is terminal: the pipeline never retries and never falls back
/// to a partial render.
#[derive(Error, Debug)]
pub enum Error {
    #[error("content is required")]
    MissingInput,

    #[error("content is empty")]
    EmptyContent,

    #[error("content lookup failed: {0}")]
    Lookup(String),

    #[error("invalid card config: {0}")]
    InvalidConfig(String),

    #[error("failed to write markup: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Structured error returned across the response boundary.
///
/// Serializes as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl From<&Error> for ErrorPayload {
    fn from(err: &Error) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
