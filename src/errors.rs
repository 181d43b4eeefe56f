//! Crate-wide error type.
//!
//! These errors never reach callers of [`Summarizer::summarize`]; the facade
//! absorbs them into the fallback path. They surface only from fallible
//! construction APIs (configuration parsing and validation) and from the
//! lower-level [`Pipeline`](crate::pipeline::Pipeline).
//!
//! [`Summarizer::summarize`]: crate::summarizer::facade::Summarizer::summarize

use thiserror::Error;

use crate::pipeline::errors::ConfigError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SummarizeError>;

#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The configuration failed one or more validation rules.
    #[error("invalid configuration: {}", format_config_errors(.0))]
    InvalidConfig(Vec<ConfigError>),

    /// The configuration document is not valid JSON for [`SummarizerConfig`].
    ///
    /// [`SummarizerConfig`]: crate::pipeline::config::SummarizerConfig
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Scoring produced NaN or infinity for a sentence.
    #[error("non-finite relevance score for sentence {position}")]
    NonFiniteScore { position: usize },

    /// A stage panicked; the payload message is kept when it is a string.
    #[error("pipeline panicked: {0}")]
    Panicked(String),
}

fn format_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
