//! Greedy line wrapping by character count.

use super::entity_safe_cut;

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// Tokens are separated by runs of whitespace and packed greedily, joined by a
/// single space. A token longer than `max_chars` is cut into `max_chars`-sized
/// chunks with no spaces between them; all chunks but the last become lines
/// and the last one starts the next line. A chunk ends early rather than
/// split an entity reference, so chunks of escaped text may be shorter.
///
/// Lengths are counted in `char`s. A `max_chars` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use aspira::text::wrap;
///
/// assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
/// assert!(wrap("   ", 10).is_empty());
/// ```
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for token in text.split_whitespace() {
        let token_len = token.chars().count();
        let candidate_len = if current.is_empty() {
            token_len
        } else {
            current_len + 1 + token_len
        };

        if candidate_len <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(token);
            current_len = candidate_len;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if token_len > max_chars {
            let mut chunks = chunk_chars(token, max_chars);
            let last = chunks.pop().unwrap_or_default();
            lines.extend(chunks);
            current_len = last.chars().count();
            current = last;
        } else {
            current.push_str(token);
            current_len = token_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Split `token` into pieces of at most `size` characters.
fn chunk_chars(token: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    let mut chunks = Vec::with_capacity(chars.len() / size + 1);
    let mut start = 0;

    while chars.len() - start > size {
        let mut end = entity_safe_cut(&chars, start + size);
        if end <= start {
            end = start + size;
        }
        chunks.push(chars[start..end].iter().collect());
        start = end;
    }
    chunks.push(chars[start..].iter().collect());

    chunks
}
