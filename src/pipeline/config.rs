//! Summarizer configuration.
//!
//! Every threshold and multiplier used by the stages lives here with its
//! default value, so a summarizer built from `SummarizerConfig::default()`
//! behaves exactly like the built-in one. Configurations are usually loaded
//! from JSON and checked by [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "language": "pt",
//!   "default_max_words": 300,
//!   "segmentation": { "min_words": 5, "min_chars": 11 },
//!   "scoring": { "lead_bonus": 1.5, "tail_bonus": 1.2 },
//!   "budget": { "lead_share": 0.3, "core_share": 0.8 },
//!   "strict": false
//! }
//! ```
//!
//! Every field is optional; omitted fields take their defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Word budget used by the automatic summary workflow.
pub const DEFAULT_MAX_WORDS: usize = 300;

/// Message returned for absent or blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Texto fornecido está vazio ou nulo.";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Stopword language. `None` uses the built-in Portuguese list.
    pub language: Option<String>,

    /// Budget used by [`Summarizer::summarize_default`].
    ///
    /// [`Summarizer::summarize_default`]: crate::summarizer::facade::Summarizer::summarize_default
    pub default_max_words: usize,

    /// Returned verbatim when the input is absent or blank.
    pub empty_input_message: String,

    pub segmentation: SegmentationConfig,
    pub scoring: ScoringConfig,
    pub budget: BudgetConfig,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: None,
            default_max_words: DEFAULT_MAX_WORDS,
            empty_input_message: EMPTY_INPUT_MESSAGE.to_string(),
            segmentation: SegmentationConfig::default(),
            scoring: ScoringConfig::default(),
            budget: BudgetConfig::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarizerConfig {
    /// Parse a configuration from JSON. Does not validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Thresholds below which a fragment is not a sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Fragments with fewer words are discarded
    pub min_words: usize,
    /// Fragments with fewer characters are discarded
    pub min_chars: usize,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_words: 5,
            min_chars: 11,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Token filtering and relevance multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Shorter tokens never enter the frequency table
    pub min_token_chars: usize,
    /// Edge windows cover `ceil(n / edge_divisor)` sentences
    pub edge_divisor: usize,
    /// Multiplier for sentences in the opening window
    pub lead_bonus: f64,
    /// Upper bound on the opening window
    pub lead_max_sentences: usize,
    /// Multiplier for sentences in the closing window
    pub tail_bonus: f64,
    /// Upper bound on the closing window
    pub tail_max_sentences: usize,
    /// Multiplier for sentences of readable length
    pub length_bonus: f64,
    pub ideal_min_words: usize,
    pub ideal_max_words: usize,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_token_chars: 3,
            edge_divisor: 10,
            lead_bonus: 1.5,
            lead_max_sentences: 5,
            tail_bonus: 1.2,
            tail_max_sentences: 3,
            length_bonus: 1.1,
            ideal_min_words: 8,
            ideal_max_words: 25,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Three-phase word budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Share of the budget the lead-in phase may fill
    pub lead_share: f64,
    /// Share of the budget the lead-in and core phases may fill together
    pub core_share: f64,
    /// Opening sentences scanned by the lead-in phase
    pub lead_sentences: usize,
    /// Closing sentences the core phase leaves to the closing phase
    pub tail_reserved: usize,
    /// Upper bound on sentences considered by the closing phase
    pub closing_max_sentences: usize,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            lead_share: 0.3,
            core_share: 0.8,
            lead_sentences: 3,
            tail_reserved: 2,
            closing_max_sentences: 2,
            unknown_fields: HashMap::new(),
        }
    }
}
