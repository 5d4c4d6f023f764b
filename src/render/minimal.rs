//! Gradient background with a single white card.

use std::fmt::{self, Write};

use super::{Decoration, DecorationContext, write_date_caption};

/// A quieter variant of [`Playful`](super::Playful): same palette, no figures
/// or emoji.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimal;

impl Decoration for Minimal {
    fn name(&self) -> &'static str {
        "minimal"
    }

    fn defs(&self, _ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        out.write_str(
            r##"<linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
<stop offset="0%" stop-color="#FF6B6B"/>
<stop offset="100%" stop-color="#4ECDC4"/>
</linearGradient>
"##,
        )
    }

    fn background(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        let size = ctx.canvas_size;
        writeln!(out, r#"<rect width="{size}" height="{size}" fill="url(#bg)"/>"#)
    }

    fn card(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        let padding = ctx.scale(80);
        let top = ctx.layout.baseline(0) - ctx.layout.line_height - padding;
        let height = ctx.layout.content_height + 2 * padding;

        writeln!(
            out,
            r##"<rect x="{}" y="{top}" width="{}" height="{height}" rx="32" fill="#FFFFFF" opacity="0.95"/>"##,
            ctx.card_x(),
            ctx.content_width,
        )?;
        writeln!(
            out,
            r##"<text x="{}" y="{}" font-family="Georgia, serif" font-size="64" fill="#FF6B6B" opacity="0.3">&quot;</text>"##,
            ctx.card_x() + ctx.scale(24),
            top + ctx.scale(64),
        )
    }

    fn foreground(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        write_date_caption(ctx, "#FFFFFF", out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    #[test]
    fn test_card_wraps_text_block() {
        let ctx = DecorationContext {
            canvas_size: 1080,
            content_width: 920,
            font_size: 42,
            layout: Layout::compute(1, 42, 1080, 1.4),
            created_at: None,
        };
        let mut out = String::new();
        Minimal.card(&ctx, &mut out).unwrap();
        // Block top is start_y - line_height = 511; 80 units of padding above.
        assert!(out.contains(r#"x="80" y="431" width="920" height="218""#));
    }
}
