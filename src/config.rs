//! Card geometry and typography configuration.
//!
//! Every constant the pipeline uses lives in [`CardConfig`], so layouts can be
//! reproduced for any canvas size. The defaults describe a 1080×1080 card.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single font-size step.
///
/// Text whose sanitized length strictly exceeds `threshold` uses at most
/// `font_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontTier {
    pub threshold: usize,
    pub font_size: u32,
}

impl FontTier {
    pub const fn new(threshold: usize, font_size: u32) -> Self {
        Self {
            threshold,
            font_size,
        }
    }
}

/// Configuration for the layout pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Width and height of the square canvas.
    pub canvas_size: u32,
    /// Horizontal space available to text, used to derive the wrap budget.
    pub content_width: u32,
    /// Font size used when the text is shorter than every tier threshold.
    pub default_font_size: u32,
    /// Tiers ordered by increasing threshold and decreasing font size.
    pub font_tiers: Vec<FontTier>,
    /// Approximate glyph advance as a fraction of the font size.
    pub char_width_factor: f64,
    /// Lower bound on the wrap budget.
    pub min_wrap_chars: usize,
    /// Maximum number of rendered lines.
    pub max_lines: usize,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            canvas_size: 1080,
            content_width: 920,
            default_font_size: 42,
            font_tiers: vec![
                FontTier::new(120, 38),
                FontTier::new(220, 34),
                FontTier::new(360, 30),
                FontTier::new(500, 26),
            ],
            char_width_factor: 0.5,
            min_wrap_chars: 20,
            max_lines: 18,
            line_height_factor: 1.4,
        }
    }
}

impl CardConfig {
    /// Parse a config from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the invariants the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(invalid("canvas_size must be positive"));
        }
        if self.content_width == 0 || self.content_width > self.canvas_size {
            return Err(invalid("content_width must be within the canvas"));
        }
        if self.default_font_size == 0 {
            return Err(invalid("default_font_size must be positive"));
        }
        if self.min_wrap_chars == 0 {
            return Err(invalid("min_wrap_chars must be positive"));
        }
        if self.max_lines == 0 {
            return Err(invalid("max_lines must be positive"));
        }
        if !(self.char_width_factor > 0.0) || !(self.line_height_factor > 0.0) {
            return Err(invalid("width and line height factors must be positive"));
        }

        let mut prev_threshold = None;
        let mut prev_size = self.default_font_size;
        for tier in &self.font_tiers {
            if prev_threshold.is_some_and(|t| tier.threshold <= t) {
                return Err(invalid("tier thresholds must be strictly increasing"));
            }
            if tier.font_size == 0 || tier.font_size >= prev_size {
                return Err(invalid("tier font sizes must be strictly decreasing"));
            }
            prev_threshold = Some(tier.threshold);
            prev_size = tier.font_size;
        }

        Ok(())
    }
}

fn invalid(msg: &str) -> Error {
    Error::InvalidConfig(msg.to_string())
}
