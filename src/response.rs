//! HTTP-shaped envelope around a render result.
//!
//! The hosting request layer is out of scope; this only fixes what it must
//! send back: the SVG with its content type, or a JSON `{error}` payload with
//! a non-success status.

use crate::card::RenderedCard;
use crate::error::{ErrorPayload, Result};
use crate::render::SVG_CONTENT_TYPE;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Status, content type and body for one card request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl CardResponse {
    pub fn from_result(result: Result<RenderedCard>) -> Self {
        match result {
            Ok(card) => Self {
                status: 200,
                content_type: SVG_CONTENT_TYPE,
                body: card.document,
            },
            Err(err) => {
                log::warn!("card render failed: {err}");
                let payload = ErrorPayload::from(&err);
                // A struct with one string field always serializes.
                let body = serde_json::to_string(&payload)
                    .unwrap_or_else(|_| String::from(r#"{"error":"Unknown error"}"#));
                Self {
                    status: 400,
                    content_type: JSON_CONTENT_TYPE,
                    body,
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
