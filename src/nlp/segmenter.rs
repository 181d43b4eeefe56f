//! Sentence segmentation
//!
//! Splits normalized text after `.`, `!` or `?` when whitespace follows, then
//! drops fragments too short to carry meaning. Positions are assigned to the
//! surviving sentences only.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pipeline::config::SegmentationConfig;
use crate::types::Sentence;

use super::tokenizer::word_count;

const TERMINATORS: &[char] = &['.', '!', '?'];

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Sentence segmenter with minimum-length thresholds
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter {
    min_words: usize,
    min_chars: usize,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::from_config(&SegmentationConfig::default())
    }
}

impl SentenceSegmenter {
    pub fn new(min_words: usize, min_chars: usize) -> Self {
        Self {
            min_words,
            min_chars,
        }
    }

    pub fn from_config(config: &SegmentationConfig) -> Self {
        Self::new(config.min_words, config.min_chars)
    }

    /// Segment `text` into sentences. An empty result is a normal outcome.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        split_after_terminators(text)
            .into_iter()
            .map(str::trim)
            .filter(|fragment| self.is_meaningful(fragment))
            .enumerate()
            .map(|(position, fragment)| Sentence::new(position, fragment))
            .collect()
    }

    fn is_meaningful(&self, fragment: &str) -> bool {
        word_count(fragment) >= self.min_words && fragment.chars().count() >= self.min_chars
    }
}

/// Cut `text` at every whitespace run preceded by a terminator.
fn split_after_terminators(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for ws in WHITESPACE_RUN.find_iter(text) {
        if text[..ws.start()].ends_with(TERMINATORS) {
            fragments.push(&text[start..ws.start()]);
            start = ws.end();
        }
    }
    fragments.push(&text[start..]);

    fragments
}
