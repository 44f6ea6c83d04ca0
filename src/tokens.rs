//! Token estimates for the condensed prompt.
//!
//! Uses tiktoken-rs's `cl100k_base` encoding. Target assistants tokenize
//! differently, so the count is an approximation shown alongside the exact
//! character length.

use anyhow::Result;

/// Approximate number of tokens in `text`.
pub fn count_tokens(text: &str) -> Result<usize> {
    let bpe = tiktoken_rs::cl100k_base()?;
    Ok(bpe.encode_ordinary(text).len())
}

/// Format a count for display. Example: "1,234"
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
