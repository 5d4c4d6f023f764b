//! XML escaping for user-authored card text.

use std::borrow::Cow;

/// Longest entity [`sanitize`] produces (`&quot;`, `&apos;`).
const MAX_ENTITY_LEN: usize = 6;

/// Escape the five XML-significant characters in `raw`.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with `&amp;`, `&lt;`, `&gt;`,
/// `&quot;` and `&apos;` in one left-to-right pass. The output is never
/// re-scanned, so an `&` already present in the input is escaped exactly once
/// (`&amp;` becomes `&amp;amp;`). Text without special characters is borrowed.
///
/// # Examples
///
/// ```
/// use aspira::text::sanitize;
///
/// assert_eq!(sanitize("a < b"), "a &lt; b");
/// assert_eq!(sanitize("plain"), "plain");
/// ```
pub fn sanitize(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

/// Move a cut at `end` back so it does not split an entity reference.
///
/// `chars` must be sanitized text, where every `&` starts an entity. Returns
/// `end` when no entity straddles it.
pub(crate) fn entity_safe_cut(chars: &[char], end: usize) -> usize {
    let end = end.min(chars.len());
    let window = end.saturating_sub(MAX_ENTITY_LEN - 1);
    for i in (window..end).rev() {
        match chars[i] {
            ';' => return end,
            '&' => return i,
            _ => {}
        }
    }
    end
}
