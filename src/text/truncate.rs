//! Line-count capping with an ellipsis marker.

use super::entity_safe_cut;

/// Marker appended to the last kept line when text overflows.
pub const ELLIPSIS: &str = "...";

const ELLIPSIS_LEN: usize = ELLIPSIS.len();

/// Cap `lines` at `max_lines`.
///
/// When lines are dropped, the new last line loses any trailing periods, is cut
/// to `max_chars - 3` characters (clamped at zero, and shortened further
/// rather than split an entity reference), and gets [`ELLIPSIS`] appended.
///
/// # Examples
///
/// ```
/// use aspira::text::truncate;
///
/// let lines = vec!["one".to_string(), "two.".to_string(), "three".to_string()];
/// let kept = truncate(lines, 2, 20);
/// assert_eq!(kept, vec!["one", "two..."]);
/// ```
pub fn truncate(mut lines: Vec<String>, max_lines: usize, max_chars: usize) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let chars: Vec<char> = last.trim_end_matches('.').chars().collect();
        let mut keep = max_chars.saturating_sub(ELLIPSIS_LEN);
        if keep < chars.len() {
            keep = entity_safe_cut(&chars, keep);
        }
        let mut shortened: String = chars.iter().take(keep).collect();
        shortened.push_str(ELLIPSIS);
        *last = shortened;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_within_limit_is_unchanged() {
        let input = lines(&["a", "b"]);
        assert_eq!(truncate(input.clone(), 2, 10), input);
    }

    #[test]
    fn test_overflow_appends_ellipsis() {
        let out = truncate(lines(&["a", "b", "c", "d"]), 3, 10);
        assert_eq!(out, lines(&["a", "b", "c..."]));
    }

    #[test]
    fn test_trailing_periods_are_stripped() {
        let out = truncate(lines(&["end of sentence...", "more"]), 1, 40);
        assert_eq!(out, lines(&["end of sentence..."]));

        let out = truncate(lines(&["done.", "more"]), 1, 40);
        assert_eq!(out, lines(&["done..."]));
    }

    #[test]
    fn test_full_line_is_cut_to_fit() {
        let full = "x".repeat(20);
        let out = truncate(vec![full.clone(), full], 1, 20);
        assert_eq!(out[0].chars().count(), 20);
        assert_eq!(out[0], format!("{}...", "x".repeat(17)));
    }

    #[test]
    fn test_tiny_budget_leaves_only_ellipsis() {
        let out = truncate(lines(&["abc", "def"]), 1, 2);
        assert_eq!(out, lines(&["..."]));
    }

    #[test]
    fn test_zero_lines() {
        assert!(truncate(lines(&["abc"]), 0, 20).is_empty());
    }

    #[test]
    fn test_cut_does_not_split_entity() {
        let out = truncate(lines(&["tom &amp; jerry", "x"]), 1, 9);
        assert_eq!(out, lines(&["tom ..."]));
    }

    #[test]
    fn test_multibyte_cut_on_char_boundary() {
        let out = truncate(lines(&["ééééé", "x"]), 1, 5);
        assert_eq!(out, lines(&["éé..."]));
    }
}
