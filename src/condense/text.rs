//! Character-based text helpers used by the renderer.
//!
//! Lengths are counted in `char`s, never bytes, so multi-byte text is never
//! split inside a code point.

use crate::constants::{ELLIPSIS, MIN_BULLET_SOURCE_CHARS};

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The longest prefix of `text` holding at most `n` characters.
pub fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Trims `text` and shortens it to at most `limit` characters, ending in `...`
/// when anything was cut.
///
/// Limits smaller than the ellipsis keep no text at all and return just the
/// ellipsis.
pub fn truncate(text: &str, limit: usize) -> String {
    let text = text.trim();
    if char_len(text) <= limit {
        return text.to_string();
    }
    let kept = take_chars(text, limit.saturating_sub(char_len(ELLIPSIS))).trim_end();
    format!("{}{}", kept, ELLIPSIS)
}

/// Picks up to `max_bullets` lines, in order, that are long enough to say
/// something, each truncated to `bullet_chars`.
pub fn bullet_summary<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    max_bullets: usize,
    bullet_chars: usize,
) -> Vec<String> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| char_len(line) >= MIN_BULLET_SOURCE_CHARS)
        .take(max_bullets)
        .map(|line| truncate(line, bullet_chars))
        .collect()
}
