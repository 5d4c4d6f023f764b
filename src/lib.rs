//! # aspira
//!
//! Deterministic layout and SVG rendering of short user-authored text onto a
//! square social-media card.
//!
//! ## Pipeline
//!
//! One call runs five pure stages over one string:
//!
//! 1. [`text::sanitize`] escapes XML-significant characters
//! 2. [`text::select_font_size`] picks a font tier from the escaped length
//! 3. [`text::wrap`] wraps greedily to a character budget
//! 4. [`text::truncate`] caps the line count with an ellipsis
//! 5. [`Layout`] centers the block and [`render::emit_svg`] writes the document
//!
//! Geometry and typography constants live in [`CardConfig`]; ornaments around
//! the text come from a swappable [`Decoration`].
//!
//! ## Quick Start
//!
//! ```
//! use aspira::{CardRenderer, CardResponse};
//!
//! let renderer = CardRenderer::new();
//! let card = renderer.render_text("Aku ingin menjadi dokter yang membantu banyak orang.")?;
//! assert_eq!(card.lines.len(), 2);
//!
//! let response = CardResponse::from_result(renderer.render_text("   "));
//! assert_eq!(response.status, 400);
//! # Ok::<(), aspira::Error>(())
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod response;
pub mod text;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use card::{CardRenderer, CardRequest, ContentSource, InMemorySource, RenderedCard};
pub use config::{CardConfig, FontTier};
pub use error::{Error, ErrorPayload, Result};
pub use layout::Layout;
pub use render::{Decoration, DecorationContext, DecorationStyle, TextStyle};
pub use response::CardResponse;
