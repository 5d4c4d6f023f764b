//! Pipeline tests.
//!
//! End-to-end scenarios through `CardRenderer`: tier selection, wrapping,
//! truncation, layout and error reporting.

use aspira::text::{ELLIPSIS, sanitize, select_font_size, wrap};
use aspira::{
    CardConfig, CardRenderer, CardRequest, CardResponse, DecorationStyle, Error, FontTier,
};
use proptest::prelude::*;

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_hi_uses_largest_tier() {
    let card = CardRenderer::new().render_text("Hi").unwrap();

    assert_eq!(card.font_size, 42);
    assert_eq!(card.lines, vec!["Hi"]);
    assert!(!card.truncated);
    assert_eq!(card.layout.line_height, 58);
    assert_eq!(card.layout.content_height, 58);
    assert_eq!(card.layout.start_y, 540 - 29 + 58);
}

#[test]
fn test_600_chars_of_words_uses_smallest_tier() {
    // 75 × "harapan " trims to 599 characters.
    let text = "harapan ".repeat(75);
    let card = CardRenderer::new().render_text(&text).unwrap();

    assert_eq!(card.font_size, 26);
    assert_eq!(card.wrap_budget, 70);
    assert_eq!(card.lines.len(), 10);
    assert!(!card.truncated);
    assert!(card.lines.iter().all(|l| l.chars().count() <= 70));
}

#[test]
fn test_overflowing_text_ends_with_ellipsis_on_line_18() {
    let text = "cita-cita ".repeat(200);
    let card = CardRenderer::new().render_text(&text).unwrap();

    assert!(card.truncated);
    assert_eq!(card.lines.len(), 18);
    let last = &card.lines[17];
    assert!(last.ends_with(ELLIPSIS));
    assert_eq!(last.chars().count(), 70);
    assert_eq!(card.layout.content_height, 18 * card.layout.line_height);
}

#[test]
fn test_unbroken_token_is_chunked_without_spaces() {
    let token = "z".repeat(200);
    let lines = wrap(&token, 50);

    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.chars().count() == 50 && !l.contains(' ')));
}

#[test]
fn test_unbroken_token_with_trailing_remainder() {
    let token = "z".repeat(230);
    let lines = wrap(&token, 50);

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "z".repeat(30));
}

#[test]
fn test_empty_input_is_rejected_before_layout() {
    let renderer = CardRenderer::new();
    for input in ["", "   ", "\n\t \r\n"] {
        assert!(matches!(renderer.render_text(input), Err(Error::EmptyContent)));
    }
}

#[test]
fn test_missing_input_is_rejected() {
    let result = CardRenderer::new().render(&CardRequest::default());
    assert!(matches!(result, Err(Error::MissingInput)));

    let response = CardResponse::from_result(result);
    assert_eq!(response.status, 400);
    assert_eq!(response.body, r#"{"error":"content is required"}"#);
}

#[test]
fn test_special_characters_are_escaped_in_lines() {
    let card = CardRenderer::new()
        .render_text(r#"Aku <3 "sekolah" & teman-teman"#)
        .unwrap();

    // The escaped form is 47 characters, over the 43-character budget.
    assert_eq!(
        card.lines,
        vec!["Aku &lt;3 &quot;sekolah&quot; &amp;", "teman-teman"]
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_smaller_canvas_recenters() {
    let config = CardConfig {
        canvas_size: 600,
        content_width: 500,
        ..CardConfig::default()
    };
    let card = CardRenderer::new()
        .with_config(config)
        .render_text("Hi")
        .unwrap();

    assert_eq!(card.layout.start_y, 300 - 29 + 58);
    assert!(card.document.contains(r#"width="600" height="600""#));
    // floor(500 / 21)
    assert_eq!(card.wrap_budget, 23);
}

#[test]
fn test_custom_tiers() {
    let config = CardConfig {
        default_font_size: 60,
        font_tiers: vec![FontTier::new(10, 40)],
        ..CardConfig::default()
    };
    let renderer = CardRenderer::new().with_config(config);

    assert_eq!(renderer.render_text("0123456789").unwrap().font_size, 60);
    assert_eq!(renderer.render_text("0123456789a").unwrap().font_size, 40);
}

#[test]
fn test_layout_independent_of_decoration() {
    let text = "Semoga semua teman sekelas lulus dengan nilai terbaik tahun ini.";
    let cards: Vec<_> = [
        DecorationStyle::Playful,
        DecorationStyle::Minimal,
        DecorationStyle::Plain,
    ]
    .into_iter()
    .map(|style| {
        CardRenderer::new()
            .with_style(style)
            .render_text(text)
            .unwrap()
    })
    .collect();

    for card in &cards[1..] {
        assert_eq!(card.lines, cards[0].lines);
        assert_eq!(card.layout, cards[0].layout);
        assert_eq!(card.font_size, cards[0].font_size);
    }
    assert_ne!(cards[0].document, cards[2].document);
}

#[test]
fn test_render_is_deterministic() {
    let renderer = CardRenderer::new();
    let request = CardRequest::new("Menjadi pilot").with_created_at("2024-08-17T09:00:00Z");
    assert_eq!(
        renderer.render(&request).unwrap(),
        renderer.render(&request).unwrap()
    );
}

#[test]
fn test_concurrent_renders_agree() {
    let renderer = CardRenderer::new();
    let expected = renderer.render_text("Belajar setiap hari").unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| renderer.render_text("Belajar setiap hari").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_lines_never_exceed_budget_or_cap(text in "\\PC{1,1500}") {
        prop_assume!(!text.trim().is_empty());
        let card = CardRenderer::new().render_text(&text).unwrap();

        prop_assert!(card.lines.len() <= 18);
        prop_assert!(!card.lines.is_empty());
        for line in &card.lines {
            prop_assert!(line.chars().count() <= card.wrap_budget);
        }
    }

    #[test]
    fn prop_safe_text_round_trips(text in "[a-zA-Z0-9 .,!?]{0,200}") {
        let out = sanitize(&text);
        prop_assert_eq!(out.as_ref(), text.as_str());
    }

    #[test]
    fn prop_font_size_never_grows_with_length(a in 0usize..800, b in 0usize..800) {
        let config = CardConfig::default();
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(select_font_size(short, &config) >= select_font_size(long, &config));
    }
}
