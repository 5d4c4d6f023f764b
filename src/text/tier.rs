//! Font-size selection and wrap budget derivation.

use crate::config::CardConfig;

/// Pick a font size for text of `sanitized_len` characters.
///
/// Uses the tier with the largest threshold that the length strictly exceeds.
/// A length exactly at a threshold keeps the larger size. Below every
/// threshold the config's default size applies.
///
/// # Examples
///
/// ```
/// use aspira::CardConfig;
/// use aspira::text::select_font_size;
///
/// let config = CardConfig::default();
/// assert_eq!(select_font_size(2, &config), 42);
/// assert_eq!(select_font_size(120, &config), 42);
/// assert_eq!(select_font_size(121, &config), 38);
/// assert_eq!(select_font_size(5000, &config), 26);
/// ```
pub fn select_font_size(sanitized_len: usize, config: &CardConfig) -> u32 {
    config
        .font_tiers
        .iter()
        .rev()
        .find(|tier| sanitized_len > tier.threshold)
        .map_or(config.default_font_size, |tier| tier.font_size)
}

/// Maximum characters per line for the given font size.
///
/// Estimates glyph width as `font_size * char_width_factor` and never returns
/// less than `min_wrap_chars`.
pub fn wrap_budget(font_size: u32, config: &CardConfig) -> usize {
    let glyph = f64::from(font_size) * config.char_width_factor;
    let fit = if glyph > 0.0 {
        (f64::from(config.content_width) / glyph).floor() as usize
    } else {
        0
    };
    fit.max(config.min_wrap_chars).max(1)
}
