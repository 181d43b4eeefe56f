//! Configuration, validation and staged execution.
//!
//! ## Submodules
//!
//! - [`config`] — Serde configuration with defaults for every threshold
//! - [`validation`] — Rule engine producing a [`ValidationReport`]
//! - [`runner`] — Stage orchestration and artifact threading
//! - [`observer`] — Logging, profiling, and debug hooks

pub mod config;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod validation;

pub use config::{
    BudgetConfig, ScoringConfig, SegmentationConfig, SummarizerConfig, DEFAULT_MAX_WORDS,
    EMPTY_INPUT_MESSAGE,
};
pub use error_code::ErrorCode;
pub use errors::ConfigError;

// Re-export observer types.
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGE_ASSEMBLE, STAGE_FREQUENCY, STAGE_NORMALIZE, STAGE_SCORE,
    STAGE_SEGMENT, STAGE_SELECT,
};

pub use runner::{Outcome, Pipeline, ScoredSummary};

pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
