//! SVG emission and swappable decoration sets.
//!
//! The emitter ([`emit_svg`]) only formats values computed by earlier stages:
//! it never escapes or wraps text itself. Everything around the text block
//! comes from a [`Decoration`], so the same layout can be dressed in different
//! styles without touching the layout math.
//!
//! # Architecture
//!
//! A decoration contributes markup at four points in the document:
//! - `defs()` inside `<defs>` (gradients, filters)
//! - `background()` before everything else
//! - `card()` between the background and the text
//! - `foreground()` after the text
//!
//! Each hook receives a [`DecorationContext`] describing the canvas and the
//! computed [`Layout`], so ornaments can track the text block.

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::layout::Layout;
use crate::text::sanitize;

mod minimal;
mod plain;
mod playful;
mod svg;

pub use minimal::Minimal;
pub use plain::Plain;
pub use playful::Playful;
pub use svg::{SVG_CONTENT_TYPE, emit_svg};

/// Canvas size the built-in decorations were drawn for.
const REFERENCE_CANVAS: i64 = 1080;

/// Everything a decoration may position itself against.
#[derive(Debug, Clone, Copy)]
pub struct DecorationContext<'a> {
    pub canvas_size: u32,
    pub content_width: u32,
    pub font_size: u32,
    pub layout: Layout,
    /// Creation timestamp as supplied by the caller, unescaped.
    pub created_at: Option<&'a str>,
}

impl DecorationContext<'_> {
    /// Horizontal center of the canvas.
    pub fn center(&self) -> i64 {
        i64::from(self.canvas_size) / 2
    }

    /// Left edge of the content card.
    pub fn card_x(&self) -> i64 {
        (i64::from(self.canvas_size) - i64::from(self.content_width)) / 2
    }

    /// Scale a coordinate from the 1080-unit reference canvas.
    pub fn scale(&self, reference: i64) -> i64 {
        reference * i64::from(self.canvas_size) / REFERENCE_CANVAS
    }

    /// Date portion of `created_at`, escaped for embedding.
    ///
    /// `2024-05-01T08:30:00Z` becomes `2024-05-01`; values without a `T`
    /// separator are used whole. Blank values yield `None`.
    pub fn created_date(&self) -> Option<String> {
        let raw = self.created_at?.trim();
        let date = raw.split_once('T').map_or(raw, |(date, _)| date);
        if date.is_empty() {
            return None;
        }
        Some(sanitize(date).into_owned())
    }
}

/// Presentation attributes of the main text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font_family: &'static str,
    pub fill: &'static str,
    pub font_weight: &'static str,
    pub letter_spacing: Option<&'static str>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "'Inter', 'SF Pro Display', -apple-system, Arial, sans-serif",
            fill: "#2D3436",
            font_weight: "600",
            letter_spacing: None,
        }
    }
}

/// A set of static and layout-relative ornaments around the text block.
///
/// Implementations must not depend on the text itself, only on the context.
pub trait Decoration: Send + Sync {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    fn text_style(&self) -> TextStyle {
        TextStyle::default()
    }

    fn defs(&self, _ctx: &DecorationContext<'_>, _out: &mut dyn Write) -> fmt::Result {
        Ok(())
    }

    fn background(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result;

    fn card(&self, _ctx: &DecorationContext<'_>, _out: &mut dyn Write) -> fmt::Result {
        Ok(())
    }

    fn foreground(&self, _ctx: &DecorationContext<'_>, _out: &mut dyn Write) -> fmt::Result {
        Ok(())
    }
}

/// Built-in decoration sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationStyle {
    /// Gradient background, floating emoji and pointing characters.
    #[default]
    Playful,
    /// Gradient background and a plain card.
    Minimal,
    /// Solid background only.
    Plain,
}

impl DecorationStyle {
    pub fn decoration(self) -> Box<dyn Decoration> {
        match self {
            DecorationStyle::Playful => Box::new(Playful),
            DecorationStyle::Minimal => Box::new(Minimal),
            DecorationStyle::Plain => Box::new(Plain),
        }
    }
}

impl FromStr for DecorationStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "playful" => Ok(DecorationStyle::Playful),
            "minimal" => Ok(DecorationStyle::Minimal),
            "plain" => Ok(DecorationStyle::Plain),
            _ => Err(Error::InvalidConfig(format!("unknown decoration style `{s}`"))),
        }
    }
}

/// Write static markup drawn on the 1080-unit reference canvas, scaled to fit.
fn write_scaled(ctx: &DecorationContext<'_>, markup: &str, out: &mut dyn Write) -> fmt::Result {
    if i64::from(ctx.canvas_size) == REFERENCE_CANVAS {
        return out.write_str(markup);
    }
    let factor = f64::from(ctx.canvas_size) / REFERENCE_CANVAS as f64;
    writeln!(out, r#"<g transform="scale({factor})">"#)?;
    out.write_str(markup)?;
    out.write_str("</g>\n")
}

/// Write the creation-date caption near the bottom edge, if a date is known.
fn write_date_caption(ctx: &DecorationContext<'_>, fill: &str, out: &mut dyn Write) -> fmt::Result {
    let Some(date) = ctx.created_date() else {
        return Ok(());
    };
    writeln!(
        out,
        r#"<text x="{}" y="{}" font-family="'Inter', Arial, sans-serif" font-size="{}" fill="{fill}" opacity="0.85" text-anchor="middle">{date}</text>"#,
        ctx.center(),
        i64::from(ctx.canvas_size) - ctx.scale(40),
        ctx.scale(22),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(created_at: Option<&str>) -> DecorationContext<'_> {
        DecorationContext {
            canvas_size: 1080,
            content_width: 920,
            font_size: 42,
            layout: Layout::compute(1, 42, 1080, 1.4),
            created_at,
        }
    }

    #[test]
    fn test_created_date_strips_time() {
        assert_eq!(
            ctx(Some("2024-05-01T08:30:00+00:00")).created_date().as_deref(),
            Some("2024-05-01")
        );
        assert_eq!(ctx(Some("1 Mei 2024")).created_date().as_deref(), Some("1 Mei 2024"));
        assert_eq!(ctx(Some("  ")).created_date(), None);
        assert_eq!(ctx(None).created_date(), None);
    }

    #[test]
    fn test_created_date_is_escaped() {
        assert_eq!(ctx(Some("<today>")).created_date().as_deref(), Some("&lt;today&gt;"));
    }

    #[test]
    fn test_card_geometry() {
        let c = ctx(None);
        assert_eq!(c.center(), 540);
        assert_eq!(c.card_x(), 80);
        assert_eq!(c.scale(100), 100);
    }

    #[test]
    fn test_style_parse() {
        assert_eq!("Minimal".parse::<DecorationStyle>().unwrap(), DecorationStyle::Minimal);
        assert!("fancy".parse::<DecorationStyle>().is_err());
    }

    #[test]
    fn test_caption_only_with_date() {
        let mut out = String::new();
        write_date_caption(&ctx(None), "#fff", &mut out).unwrap();
        assert!(out.is_empty());

        write_date_caption(&ctx(Some("2024-05-01")), "#fff", &mut out).unwrap();
        assert!(out.contains(">2024-05-01</text>"));
        assert!(out.contains(r#"y="1040""#));
    }

    #[test]
    fn test_scaled_markup_wraps_only_off_reference() {
        let mut out = String::new();
        write_scaled(&ctx(None), "<circle/>\n", &mut out).unwrap();
        assert_eq!(out, "<circle/>\n");

        let mut small = ctx(None);
        small.canvas_size = 540;
        small.content_width = 460;
        let mut out = String::new();
        write_scaled(&small, "<circle/>\n", &mut out).unwrap();
        assert_eq!(out, "<g transform=\"scale(0.5)\">\n<circle/>\n</g>\n");
    }
}
