//! Solid background with an outlined content panel and no ornaments.

use std::fmt::{self, Write};

use super::{Decoration, DecorationContext, TextStyle, write_date_caption};

#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Decoration for Plain {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn text_style(&self) -> TextStyle {
        TextStyle {
            fill: "#1E1E1E",
            ..TextStyle::default()
        }
    }

    fn background(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        let size = ctx.canvas_size;
        writeln!(out, r##"<rect width="{size}" height="{size}" fill="#FAFAF7"/>"##)
    }

    fn card(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        let padding = ctx.scale(80);
        let top = ctx.layout.baseline(0) - ctx.layout.line_height - padding;
        let height = ctx.layout.content_height + 2 * padding;

        writeln!(
            out,
            r##"<rect x="{}" y="{top}" width="{}" height="{height}" rx="24" fill="#FFFFFF" stroke="#E4E4DF" stroke-width="2"/>"##,
            ctx.card_x(),
            ctx.content_width,
        )
    }

    fn foreground(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        write_date_caption(ctx, "#8A8A8A", out)
    }
}
