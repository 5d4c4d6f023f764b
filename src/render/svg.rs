//! Fixed-canvas SVG document assembly.

use std::fmt::{self, Write};

use super::{Decoration, DecorationContext};

/// Content type of the emitted document.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Assemble the SVG document for already-wrapped, already-escaped `lines`.
///
/// The first `<tspan>` sits on the layout's start baseline; every following
/// one is offset by one line height. Lines are written verbatim.
pub fn emit_svg(
    lines: &[String],
    ctx: &DecorationContext<'_>,
    decoration: &dyn Decoration,
) -> Result<String, fmt::Error> {
    let size = ctx.canvas_size;
    let layout = &ctx.layout;
    let style = decoration.text_style();
    let center = ctx.center();

    let mut svg = String::with_capacity(4096 + lines.iter().map(|l| l.len() + 64).sum::<usize>());

    writeln!(
        svg,
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
    )?;

    svg.push_str("<defs>\n");
    decoration.defs(ctx, &mut svg)?;
    svg.push_str("</defs>\n");

    decoration.background(ctx, &mut svg)?;
    decoration.card(ctx, &mut svg)?;

    write!(
        svg,
        r#"<text x="{center}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" fill="{}" font-weight="{}""#,
        layout.start_y, style.font_family, ctx.font_size, style.fill, style.font_weight,
    )?;
    if let Some(spacing) = style.letter_spacing {
        write!(svg, r#" letter-spacing="{spacing}""#)?;
    }
    svg.push_str(">\n");

    for (i, line) in lines.iter().enumerate() {
        let dy = if i == 0 { 0 } else { layout.line_height };
        writeln!(
            svg,
            r#"<tspan x="{center}" dy="{dy}" xml:space="preserve">{line}</tspan>"#
        )?;
    }
    svg.push_str("</text>\n");

    decoration.foreground(ctx, &mut svg)?;
    svg.push_str("</svg>\n");

    Ok(svg)
}
