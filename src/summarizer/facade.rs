//! Summarizer facade
//!
//! [`Summarizer`] is the entry point collaborators use. Its contract is
//! total: every call returns a string. Blank input yields the configured
//! sentinel message, a document without usable sentences is truncated, and
//! any failure inside the pipeline (an error or a panic) is absorbed and the
//! original text truncated instead.

use std::panic::{self, AssertUnwindSafe};

use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::Serialize;

use crate::errors::{Result, SummarizeError};
use crate::nlp::tokenizer::word_count;
use crate::pipeline::config::SummarizerConfig;
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::{Outcome, Pipeline};
use crate::pipeline::validation::ValidationEngine;
use crate::types::{FallbackReason, SummaryPath};

use super::fallback::truncate;

static DEFAULT_SUMMARIZER: Lazy<Summarizer> = Lazy::new(Summarizer::new);

/// Summarize `text` to roughly `max_words` words with the default settings.
pub fn summarize(text: &str, max_words: usize) -> String {
    DEFAULT_SUMMARIZER.summarize(text, max_words)
}

/// Anything that turns a document into a summary of about `max_words` words.
pub trait TextSummarizer: Send + Sync {
    fn summarize(&self, text: &str, max_words: usize) -> String;
}

/// A summary together with the path that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub text: String,
    pub path: SummaryPath,
    /// Whitespace-separated words in `text`
    pub word_count: usize,
    /// Positions of the selected sentences; empty unless `path` is
    /// [`SummaryPath::Scored`]
    pub positions: Vec<usize>,
}

impl SummaryReport {
    fn unscored(text: String, path: SummaryPath) -> Self {
        Self {
            word_count: word_count(&text),
            text,
            path,
            positions: Vec::new(),
        }
    }

    fn fallback(text: String, reason: FallbackReason) -> Self {
        Self::unscored(text, SummaryPath::Fallback(reason))
    }
}

/// Extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    pipeline: Pipeline,
    empty_message: String,
    default_max_words: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Summarizer with the built-in settings and the shared Portuguese
    /// stopword list.
    pub fn new() -> Self {
        let config = SummarizerConfig::default();
        Self {
            pipeline: Pipeline::from_config(&config),
            empty_message: config.empty_input_message,
            default_max_words: config.default_max_words,
        }
    }

    /// Build from a configuration, refusing it if validation reports errors.
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(&config);

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(path = %warning.path, "{}", warning.message);
        }

        if report.has_errors() {
            return Err(SummarizeError::InvalidConfig(report.into_errors()));
        }

        Ok(Self {
            pipeline: Pipeline::from_config(&config),
            empty_message: config.empty_input_message,
            default_max_words: config.default_max_words,
        })
    }

    /// Parse, validate and build from a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::with_config(SummarizerConfig::from_json(json)?)
    }

    pub fn default_max_words(&self) -> usize {
        self.default_max_words
    }

    /// Summarize `text` to roughly `max_words` words. Never fails.
    pub fn summarize(&self, text: &str, max_words: usize) -> String {
        self.report(text, max_words).text
    }

    /// Like [`summarize`](Self::summarize), treating `None` as blank input.
    pub fn summarize_optional(&self, text: Option<&str>, max_words: usize) -> String {
        self.summarize(text.unwrap_or_default(), max_words)
    }

    /// Summarize with the configured default budget.
    pub fn summarize_default(&self, text: &str) -> String {
        self.summarize(text, self.default_max_words)
    }

    /// Summarize many documents in parallel. Output order matches input order.
    pub fn summarize_batch<S>(&self, texts: &[S], max_words: usize) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref(), max_words))
            .collect()
    }

    /// Summarize and describe which path produced the result.
    pub fn report(&self, text: &str, max_words: usize) -> SummaryReport {
        self.report_with_observer(text, max_words, &mut NoopObserver)
    }

    /// [`report`](Self::report) with stage callbacks delivered to `observer`.
    pub fn report_with_observer(
        &self,
        text: &str,
        max_words: usize,
        observer: &mut impl PipelineObserver,
    ) -> SummaryReport {
        if text.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("blank input, returning sentinel message");
            return SummaryReport::unscored(self.empty_message.clone(), SummaryPath::EmptyInput);
        }

        if max_words == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!("zero word budget, returning empty summary");
            return SummaryReport::unscored(String::new(), SummaryPath::ZeroBudget);
        }

        match self.run_guarded(text, max_words, observer) {
            Ok(Outcome::Scored(summary)) => SummaryReport {
                word_count: word_count(&summary.text),
                text: summary.text,
                path: SummaryPath::Scored,
                positions: summary.positions,
            },
            Ok(Outcome::NeedsFallback { normalized, reason }) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?reason, "no scored selection, truncating");
                SummaryReport::fallback(truncate(&normalized, max_words), reason)
            }
            Err(err) => {
                log_absorbed(&err);
                SummaryReport::fallback(
                    truncate(text, max_words),
                    FallbackReason::ProcessingError,
                )
            }
        }
    }

    /// Run the pipeline, turning a panic into [`SummarizeError::Panicked`].
    fn run_guarded(
        &self,
        text: &str,
        max_words: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<Outcome> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.pipeline.run(text, max_words, observer)
        }))
        .unwrap_or_else(|payload| Err(SummarizeError::Panicked(panic_message(payload.as_ref()))))
    }
}

impl TextSummarizer for Summarizer {
    fn summarize(&self, text: &str, max_words: usize) -> String {
        Summarizer::summarize(self, text, max_words)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_absorbed(err: &SummarizeError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %err, "summarization failed, falling back to truncation");
}
