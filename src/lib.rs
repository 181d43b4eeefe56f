//! # rapid_excerpt
//!
//! Offline extractive summarization.
//!
//! A document is normalized, split into sentences, and each sentence is
//! scored by how densely it carries the document's frequent content words,
//! with bonuses for opening, closing and readable-length sentences. A
//! three-phase selector then fills a word budget, and the chosen sentences
//! are joined back in document order.
//!
//! ## Features
//!
//! - **Total**: [`Summarizer::summarize`] always returns a string
//! - **Deterministic**: identical inputs give identical summaries
//! - **Configurable**: every threshold is a validated JSON setting
//! - **Observable**: per-stage `tracing` spans and [`PipelineObserver`] hooks
//!
//! ## Quick start
//!
//! ```rust
//! let summary = rapid_excerpt::summarize("Isso é um teste curto.", 100);
//! assert_eq!(summary, "Isso é um teste curto.");
//! ```

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{FallbackReason, ScoredSentence, SelectionPhase, Sentence, SummaryPath};

// Re-export main functionality
pub use nlp::{segmenter::SentenceSegmenter, stopwords::StopwordSet, tokenizer::Tokenizer};
pub use pipeline::{
    ConfigError, PipelineObserver, SummarizerConfig, ValidationEngine, DEFAULT_MAX_WORDS,
    EMPTY_INPUT_MESSAGE,
};
pub use summarizer::facade::{summarize, Summarizer, SummaryReport, TextSummarizer};
pub use summarizer::fallback::truncate;
pub use summarizer::frequency::{FrequencyAnalyzer, FrequencyTable};
pub use summarizer::scorer::RelevanceScorer;
pub use summarizer::selector::BudgetedSelector;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
