//! Word tokenization for frequency counting and scoring

use once_cell::sync::Lazy;
use regex::Regex;

use super::stopwords::StopwordSet;

static NON_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));

/// Lowercases text and splits it on runs of non-word characters.
///
/// Word characters are Unicode-aware, so accented letters stay inside their
/// token ("revolução" is one token).
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    min_token_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Tokenizer {
    /// `min_token_chars` is the shortest token counted as content.
    pub fn new(min_token_chars: usize) -> Self {
        Self { min_token_chars }
    }

    /// All non-empty lowercase tokens of `text`, in order.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        NON_WORD_RUN
            .split(&lower)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Whether a lowercase token carries content: long enough and not a
    /// stopword.
    #[inline]
    pub fn is_content(&self, token: &str, stopwords: &StopwordSet) -> bool {
        token.chars().count() >= self.min_token_chars && !stopwords.contains(token)
    }

    /// Tokens of `text` that pass [`Self::is_content`].
    pub fn content_tokens(&self, text: &str, stopwords: &StopwordSet) -> Vec<String> {
        self.tokens(text)
            .into_iter()
            .filter(|t| self.is_content(t, stopwords))
            .collect()
    }
}

/// Number of whitespace-separated words.
#[inline]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
