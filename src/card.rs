//! The card pipeline: sanitize → tier → wrap → truncate → layout → SVG.
//!
//! [`CardRenderer`] holds configuration and a decoration set; it has no
//! per-call state and can be shared freely between threads.
//!
//! # Example
//!
//! ```
//! use aspira::{CardRenderer, CardRequest, DecorationStyle};
//!
//! let renderer = CardRenderer::new().with_style(DecorationStyle::Minimal);
//! let card = renderer.render(&CardRequest::new("Aku ingin jadi dokter"))?;
//!
//! assert_eq!(card.font_size, 42);
//! assert_eq!(card.lines, vec!["Aku ingin jadi dokter"]);
//! assert!(card.document.starts_with("<svg"));
//! # Ok::<(), aspira::Error>(())
//! ```

use std::collections::HashMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::CardConfig;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::render::{Decoration, DecorationContext, DecorationStyle, emit_svg};
use crate::text::{sanitize, select_font_size, truncate, wrap, wrap_budget};

/// Input to a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRequest {
    /// The text to render. Required.
    pub content: Option<String>,
    /// Creation timestamp, shown by decorations only.
    pub created_at: Option<String>,
}

impl CardRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }
}

/// Output of a render: intermediate layout data plus the final document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    pub font_size: u32,
    pub wrap_budget: usize,
    /// Wrapped, escaped, possibly truncated lines.
    pub lines: Vec<String>,
    /// Whether lines were dropped to fit the line cap.
    pub truncated: bool,
    pub layout: Layout,
    /// The SVG markup.
    #[serde(skip)]
    pub document: String,
}

/// Where text lives when a card is requested by identifier.
///
/// Implemented by the surrounding service over its data store.
pub trait ContentSource {
    /// Resolve `id` to a request. Failures should be reported as
    /// [`Error::Lookup`].
    fn fetch(&self, id: &str) -> Result<CardRequest>;
}

/// A [`ContentSource`] backed by a map, for tests and local use.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: HashMap<String, CardRequest>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, request: CardRequest) {
        self.entries.insert(id.into(), request);
    }
}

impl ContentSource for InMemorySource {
    fn fetch(&self, id: &str) -> Result<CardRequest> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| Error::Lookup(format!("no content with id `{id}`")))
    }
}

/// Renders text into a square SVG card.
pub struct CardRenderer {
    config: CardConfig,
    decoration: Box<dyn Decoration>,
}

impl CardRenderer {
    /// Create a renderer with the default config and the playful decoration.
    pub fn new() -> Self {
        Self {
            config: CardConfig::default(),
            decoration: DecorationStyle::default().decoration(),
        }
    }

    /// Use a custom config.
    pub fn with_config(mut self, config: CardConfig) -> Self {
        self.config = config;
        self
    }

    /// Use one of the built-in decoration sets.
    pub fn with_style(mut self, style: DecorationStyle) -> Self {
        self.decoration = style.decoration();
        self
    }

    /// Use a custom decoration set.
    pub fn with_decoration(mut self, decoration: Box<dyn Decoration>) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Run the whole pipeline for one request.
    pub fn render(&self, request: &CardRequest) -> Result<RenderedCard> {
        let content = request.content.as_deref().ok_or(Error::MissingInput)?;
        let raw = content.trim();
        if raw.is_empty() {
            return Err(Error::EmptyContent);
        }

        let config = &self.config;
        config.validate()?;
        let safe = sanitize(raw);
        let safe_len = safe.chars().count();

        let font_size = select_font_size(safe_len, config);
        let budget = wrap_budget(font_size, config);
        trace!("sanitized length {safe_len}, font size {font_size}, budget {budget}");

        let wrapped = wrap(&safe, budget);
        let wrapped_count = wrapped.len();
        let lines = truncate(wrapped, config.max_lines, budget);
        let truncated = lines.len() < wrapped_count;

        let layout = Layout::compute(
            lines.len(),
            font_size,
            config.canvas_size,
            config.line_height_factor,
        );

        let ctx = DecorationContext {
            canvas_size: config.canvas_size,
            content_width: config.content_width,
            font_size,
            layout,
            created_at: request.created_at.as_deref(),
        };
        let document = emit_svg(&lines, &ctx, self.decoration.as_ref())?;

        debug!(
            "rendered {} card: {} lines{} at {}px",
            self.decoration.name(),
            lines.len(),
            if truncated { " (truncated)" } else { "" },
            font_size
        );

        Ok(RenderedCard {
            font_size,
            wrap_budget: budget,
            lines,
            truncated,
            layout,
            document,
        })
    }

    /// Shorthand for rendering bare text.
    pub fn render_text(&self, content: &str) -> Result<RenderedCard> {
        self.render(&CardRequest::new(content))
    }

    /// Resolve `id` through `source`, then render.
    ///
    /// Source errors other than [`Error::Lookup`] are converted into one, so a
    /// failed lookup is never mistaken for empty content.
    pub fn render_by_id(&self, source: &dyn ContentSource, id: &str) -> Result<RenderedCard> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::MissingInput);
        }
        let request = source.fetch(id).map_err(|err| match err {
            Error::Lookup(_) => err,
            other => Error::Lookup(other.to_string()),
        })?;
        self.render(&request)
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new()
    }
}
