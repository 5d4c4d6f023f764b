//! Gradient card with floating emoji and two pointing characters.

use std::fmt::{self, Write};

use super::{Decoration, DecorationContext, TextStyle, write_date_caption, write_scaled};

const DEFS: &str = r##"<linearGradient id="bg" x1="0" y1="0" x2="0" y2="1">
<stop offset="0%" stop-color="#FF6B6B"/>
<stop offset="100%" stop-color="#4ECDC4"/>
</linearGradient>
<linearGradient id="cardBg" x1="0" y1="0" x2="0" y2="1">
<stop offset="0%" stop-color="#FFFFFF"/>
<stop offset="100%" stop-color="#F8F9FA"/>
</linearGradient>
<filter id="softShadow">
<feDropShadow dx="0" dy="10" stdDeviation="20" flood-color="#000" flood-opacity="0.15"/>
</filter>
"##;

const ORNAMENTS: &str = r##"<circle cx="150" cy="150" r="100" fill="#FFE66D" opacity="0.3"/>
<circle cx="930" cy="200" r="120" fill="#FF6B6B" opacity="0.25"/>
<circle cx="100" cy="900" r="90" fill="#4ECDC4" opacity="0.3"/>
<circle cx="950" cy="880" r="110" fill="#95E1D3" opacity="0.25"/>
<text x="180" y="250" font-size="50" opacity="0.6">💭</text>
<text x="850" y="280" font-size="45" opacity="0.6">✨</text>
<text x="120" y="820" font-size="48" opacity="0.6">💫</text>
<text x="900" y="850" font-size="52" opacity="0.6">🌟</text>
<text x="300" y="180" font-size="40" opacity="0.5">💡</text>
<text x="750" y="900" font-size="42" opacity="0.5">🎯</text>
"##;

const HEADER_TITLE: &str = "💬 ASPIRASI SISWA";

/// Colors of one pointing character.
struct Figure {
    body: &'static str,
    head: &'static str,
    arm: &'static str,
    arm_stroke: &'static str,
    accent: &'static str,
}

const LEFT_FIGURE: Figure = Figure {
    body: "#FFE66D",
    head: "#FFD93D",
    arm: "#FFCB74",
    arm_stroke: "#FFB84D",
    accent: "#FF6B6B",
};

const RIGHT_FIGURE: Figure = Figure {
    body: "#95E1D3",
    head: "#4ECDC4",
    arm: "#81D8D0",
    arm_stroke: "#4ECDC4",
    accent: "#4ECDC4",
};

/// The default share-card design.
#[derive(Debug, Clone, Copy, Default)]
pub struct Playful;

impl Decoration for Playful {
    fn name(&self) -> &'static str {
        "playful"
    }

    fn text_style(&self) -> TextStyle {
        TextStyle {
            letter_spacing: Some("0.3"),
            ..TextStyle::default()
        }
    }

    fn defs(&self, _ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        out.write_str(DEFS)
    }

    fn background(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        let size = ctx.canvas_size;
        writeln!(out, r#"<rect width="{size}" height="{size}" fill="url(#bg)"/>"#)?;
        write_scaled(ctx, ORNAMENTS, out)
    }

    fn card(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        let x = ctx.card_x();
        let y = ctx.scale(200);
        let width = ctx.content_width;
        let height = ctx.layout.content_height + ctx.scale(200);
        let start_y = ctx.layout.start_y;
        let half = ctx.layout.content_height / 2;

        writeln!(
            out,
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="40" fill="url(#cardBg)" filter="url(#softShadow)"/>"#
        )?;
        writeln!(
            out,
            r##"<rect x="{x}" y="{y}" width="{width}" height="{}" rx="40" fill="#FF6B6B"/>"##,
            ctx.scale(100)
        )?;
        writeln!(
            out,
            r##"<text x="{}" y="{}" font-family="'Inter', 'SF Pro Display', Arial, sans-serif" font-size="{}" font-weight="800" fill="#FFFFFF" text-anchor="middle">{HEADER_TITLE}</text>"##,
            ctx.center(),
            ctx.scale(265),
            ctx.scale(38),
        )?;

        write_figure(
            out,
            &format!("translate({}, {})", ctx.scale(100), start_y + half - 80),
            &LEFT_FIGURE,
            (30, 25),
        )?;
        write_figure(
            out,
            &format!(
                "translate({}, {}) scale(-1, 1)",
                ctx.scale(980),
                start_y + half + 40
            ),
            &RIGHT_FIGURE,
            (35, 30),
        )?;

        write_arrows(ctx, out)?;

        writeln!(
            out,
            r##"<text x="{}" y="{}" font-family="Georgia, serif" font-size="80" fill="#FF6B6B" opacity="0.2" font-weight="bold">&quot;</text>"##,
            ctx.scale(150),
            start_y - 10,
        )
    }

    fn foreground(&self, ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
        let start_y = ctx.layout.start_y;
        let bottom = start_y + ctx.layout.content_height;

        writeln!(
            out,
            r##"<text x="{}" y="{}" font-family="Georgia, serif" font-size="80" fill="#4ECDC4" opacity="0.2" font-weight="bold" text-anchor="end">&quot;</text>"##,
            ctx.scale(930),
            bottom + 50,
        )?;

        writeln!(out, r#"<g transform="translate({}, {})">"#, ctx.center(), bottom + 120)?;
        out.write_str(
            r##"<circle cx="-30" cy="0" r="5" fill="#FF6B6B"/>
<circle cx="0" cy="0" r="5" fill="#FFE66D"/>
<circle cx="30" cy="0" r="5" fill="#4ECDC4"/>
</g>
"##,
        )?;

        let stars = [
            (250, start_y - 80, 35, "⭐"),
            (830, start_y - 70, 30, "✨"),
            (200, bottom + 140, 32, "💫"),
            (880, bottom + 150, 35, "🌟"),
        ];
        for (x, y, font_size, glyph) in stars {
            writeln!(
                out,
                r#"<text x="{}" y="{y}" font-size="{font_size}" opacity="0.6">{glyph}</text>"#,
                ctx.scale(x)
            )?;
        }

        write_date_caption(ctx, "#FFFFFF", out)
    }
}

/// A small person pointing toward the text block.
fn write_figure(
    out: &mut dyn Write,
    transform: &str,
    figure: &Figure,
    marks_y: (i32, i32),
) -> fmt::Result {
    writeln!(out, r#"<g transform="{transform}">"#)?;
    writeln!(
        out,
        r#"<ellipse cx="0" cy="80" rx="35" ry="45" fill="{}"/>"#,
        figure.body
    )?;
    writeln!(out, r#"<circle cx="0" cy="20" r="28" fill="{}"/>"#, figure.head)?;
    out.write_str(
        r##"<circle cx="-8" cy="18" r="3" fill="#333"/>
<circle cx="8" cy="18" r="3" fill="#333"/>
<path d="M -10 26 Q 0 32 10 26" stroke="#333" stroke-width="2" fill="none" stroke-linecap="round"/>
"##,
    )?;
    writeln!(
        out,
        r#"<path d="M 35 60 L 80 60 L 85 55 L 90 60 L 85 65 L 80 60" fill="{}" stroke="{}" stroke-width="2"/>"#,
        figure.arm, figure.arm_stroke
    )?;
    writeln!(
        out,
        r#"<text x="50" y="{}" font-size="24" fill="{}">!</text>"#,
        marks_y.0, figure.accent
    )?;
    writeln!(
        out,
        r#"<text x="65" y="{}" font-size="20" fill="{}">!</text>"#,
        marks_y.1, figure.accent
    )?;
    out.write_str("</g>\n")
}

/// Two arrow heads aimed at the first line, one from each side.
fn write_arrows(ctx: &DecorationContext<'_>, out: &mut dyn Write) -> fmt::Result {
    let tip_y = ctx.layout.start_y - 20;
    let tail_y = ctx.layout.start_y - 50;
    let arrows = [
        (ctx.scale(150), ctx.scale(180), "#FF6B6B", [-5, -15]),
        (ctx.scale(930), ctx.scale(900), "#4ECDC4", [5, 15]),
    ];

    out.write_str("<g opacity=\"0.7\">\n")?;
    for (tail_x, tip_x, color, [barb_dx, wing_dx]) in arrows {
        let segments = [
            (tail_x, tail_y, tip_x, tip_y),
            (tip_x, tip_y, tip_x + barb_dx, tip_y - 15),
            (tip_x, tip_y, tip_x + wing_dx, tip_y - 5),
        ];
        for (x1, y1, x2, y2) in segments {
            writeln!(
                out,
                r#"<path d="M {x1} {y1} L {x2} {y2}" stroke="{color}" stroke-width="4" stroke-linecap="round"/>"#
            )?;
        }
    }
    out.write_str("</g>\n")
}
