//! Core value types shared by the summarization stages.

use serde::Serialize;

/// One candidate sentence of a document.
///
/// Created by the segmenter and never mutated afterwards. `position` is the
/// 0-based index among surviving sentences, so positions are unique and
/// strictly increasing in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// 0-based position in the document
    pub position: usize,
    /// Trimmed sentence text, terminal punctuation included
    pub text: String,
    /// Number of whitespace-separated words
    pub word_count: usize,
}

impl Sentence {
    /// Create a sentence, counting its words.
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = text.split_whitespace().count();
        Self {
            position,
            text,
            word_count,
        }
    }
}

/// A sentence paired with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredSentence<'a> {
    pub sentence: &'a Sentence,
    /// Density-style relevance, always `>= 0`
    pub score: f64,
}

impl<'a> ScoredSentence<'a> {
    pub fn new(sentence: &'a Sentence, score: f64) -> Self {
        Self { sentence, score }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.sentence.position
    }
}

/// Phase of the budgeted selector that picked a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    /// Opening sentences, up to the lead share of the budget
    Lead,
    /// Highest-scoring middle sentences, up to the core share
    Core,
    /// Closing sentences, up to the full budget
    Closing,
}

/// Why the facade fell back to plain truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Segmentation kept no sentence
    NoSentences,
    /// Sentences existed but none fit any phase budget
    EmptySelection,
    /// A stage failed or panicked
    ProcessingError,
}

/// Which path produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reason")]
pub enum SummaryPath {
    /// Input was absent or blank; the sentinel message was returned
    EmptyInput,
    /// A zero word budget was requested; the output is empty
    ZeroBudget,
    /// Scored extractive selection
    Scored,
    /// Word-budget truncation
    Fallback(FallbackReason),
}
