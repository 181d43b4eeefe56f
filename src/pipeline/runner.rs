//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`Pipeline::run`] executes the stages in order, threading each artifact
//! into the next stage and notifying a [`PipelineObserver`] at every
//! boundary:
//!
//! 1. Normalize whitespace
//! 2. Segment into sentences
//! 3. Count content-word frequencies
//! 4. Score sentences
//! 5. Select within the word budget
//! 6. Assemble the summary text
//!
//! The runner reports expected degraded conditions (no sentences, nothing
//! selected) as [`Outcome::NeedsFallback`] rather than as errors; the
//! facade decides what to return for them.

use std::sync::Arc;

use crate::errors::Result;
use crate::nlp::normalizer::normalize;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::stopwords::{self, StopwordSet};
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::config::SummarizerConfig;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_ASSEMBLE,
    STAGE_FREQUENCY, STAGE_NORMALIZE, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT,
};
use crate::summarizer::frequency::FrequencyAnalyzer;
use crate::summarizer::scorer::RelevanceScorer;
use crate::summarizer::selector::BudgetedSelector;
use crate::types::FallbackReason;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Summary produced by scored selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSummary {
    pub text: String,
    /// Positions of the selected sentences, ascending
    pub positions: Vec<usize>,
    /// Number of sentences the segmenter kept
    pub sentence_count: usize,
    /// Words consumed from the budget
    pub words_used: usize,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Scored(ScoredSummary),
    /// Scored selection is not possible; `normalized` is the text to
    /// truncate instead.
    NeedsFallback {
        normalized: String,
        reason: FallbackReason,
    },
}

/// The configured stage set plus the stopword list it scores against.
#[derive(Debug, Clone)]
pub struct Pipeline {
    segmenter: SentenceSegmenter,
    analyzer: FrequencyAnalyzer,
    scorer: RelevanceScorer,
    selector: BudgetedSelector,
    stopwords: Arc<StopwordSet>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl Pipeline {
    /// Build the stages from `config`. The stopword list is loaded here, once;
    /// without a configured language the process-wide default is shared.
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let stopwords = match &config.language {
            Some(language) => Arc::new(StopwordSet::new(language)),
            None => stopwords::shared_default(),
        };
        Self::with_stopwords(config, stopwords)
    }

    /// Build the stages from `config`, scoring against `stopwords`.
    pub fn with_stopwords(config: &SummarizerConfig, stopwords: Arc<StopwordSet>) -> Self {
        Self {
            segmenter: SentenceSegmenter::from_config(&config.segmentation),
            analyzer: FrequencyAnalyzer::new(Tokenizer::new(config.scoring.min_token_chars)),
            scorer: RelevanceScorer::with_config(config.scoring.clone()),
            selector: BudgetedSelector::with_config(config.budget.clone()),
            stopwords,
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Run every stage on `text` with a budget of `max_words`.
    pub fn run(
        &self,
        text: &str,
        max_words: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<Outcome> {
        // Stage 1: Normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let normalized = normalize(text);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_NORMALIZE, &report);

        // Stage 2: Segment
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = self.segmenter.segment(&normalized);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(sentences.len())
            .words(sentences.iter().map(|s| s.word_count).sum())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&sentences);

        if sentences.is_empty() {
            return Ok(Outcome::NeedsFallback {
                normalized,
                reason: FallbackReason::NoSentences,
            });
        }

        // Stage 3: Frequencies
        trace_stage!(STAGE_FREQUENCY);
        observer.on_stage_start(STAGE_FREQUENCY);
        let clock = StageClock::start();
        let frequencies = self.analyzer.build(&sentences, &self.stopwords);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(frequencies.len())
            .build();
        observer.on_stage_end(STAGE_FREQUENCY, &report);
        observer.on_frequencies(&frequencies);

        // Stage 4: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let scored = self.scorer.score(&sentences, &frequencies)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .items(scored.len())
            .build();
        observer.on_stage_end(STAGE_SCORE, &report);
        observer.on_scores(&scored);

        // Stage 5: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selection = self.selector.select(&scored, max_words);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(selection.len())
            .words(selection.words_used)
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selection(&selection);

        if selection.is_empty() {
            return Ok(Outcome::NeedsFallback {
                normalized,
                reason: FallbackReason::EmptySelection,
            });
        }

        // Stage 6: Assemble
        trace_stage!(STAGE_ASSEMBLE);
        observer.on_stage_start(STAGE_ASSEMBLE);
        let clock = StageClock::start();
        let text = selection.assemble();
        let report = StageReportBuilder::new(clock.elapsed())
            .words(text.split_whitespace().count())
            .build();
        observer.on_stage_end(STAGE_ASSEMBLE, &report);

        Ok(Outcome::Scored(ScoredSummary {
            text,
            positions: selection.positions(),
            sentence_count: sentences.len(),
            words_used: selection.words_used,
        }))
    }
}
