//! Word-budget truncation used when scored selection is not possible

use crate::nlp::normalizer::normalize;

use super::selector::ensure_period;

/// Truncate `text` to `max_words` words.
///
/// The text is normalized first. Text within the budget is returned whole,
/// ending with a period unless it already ends in `.`, `!` or `?`. Longer
/// text keeps its first `max_words` words and gets `"..."` appended.
pub fn truncate(text: &str, max_words: usize) -> String {
    let normalized = normalize(text);
    let words: Vec<&str> = normalized.split_whitespace().collect();

    if words.len() <= max_words {
        return ensure_period(normalized);
    }

    let mut truncated = words[..max_words].join(" ");
    truncated.push_str("...");
    truncated
}
