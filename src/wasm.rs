//! WASM bindings for rendering cards inside an edge function.
//!
//! Errors cross the boundary as the JSON `{error}` payload string.

use wasm_bindgen::prelude::*;

use crate::card::{CardRenderer, CardRequest};
use crate::config::CardConfig;
use crate::error::{Error, ErrorPayload};
use crate::render::DecorationStyle;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn to_js(err: Error) -> JsValue {
    let payload = ErrorPayload::from(&err);
    JsValue::from_str(&serde_json::to_string(&payload).unwrap_or_else(|_| err.to_string()))
}

/// Render `content` with the default config and decoration.
///
/// Returns the SVG document.
#[wasm_bindgen]
pub fn render_card(content: &str, created_at: Option<String>) -> Result<String, JsValue> {
    let request = CardRequest {
        content: Some(content.to_string()),
        created_at,
    };
    let card = CardRenderer::new().render(&request).map_err(to_js)?;
    Ok(card.document)
}

/// Render with an explicit decoration style and a JSON config.
///
/// `config_json` may be empty to use the defaults.
#[wasm_bindgen]
pub fn render_card_with(
    content: &str,
    created_at: Option<String>,
    style: &str,
    config_json: &str,
) -> Result<String, JsValue> {
    let style: DecorationStyle = style.parse().map_err(to_js)?;
    let config = if config_json.trim().is_empty() {
        CardConfig::default()
    } else {
        CardConfig::from_json(config_json).map_err(to_js)?
    };

    let request = CardRequest {
        content: Some(content.to_string()),
        created_at,
    };
    let card = CardRenderer::new()
        .with_config(config)
        .with_style(style)
        .render(&request)
        .map_err(to_js)?;
    Ok(card.document)
}
