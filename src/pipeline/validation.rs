//! Validation engine for summarizer configurations.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarizerConfig`] and collects every diagnostic into a
//! [`ValidationReport`]. It never short-circuits on the first error, so
//! users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_excerpt::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&config);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::nlp::stopwords::is_supported_language;

use super::config::SummarizerConfig;
use super::error_code::ErrorCode;
use super::errors::ConfigError;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: a [`ConfigError`] with a severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigError,
}

impl ValidationDiagnostic {
    pub fn error(err: ConfigError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ConfigError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the report, keeping only the errors.
    pub fn into_errors(self) -> Vec<ConfigError> {
        self.diagnostics
            .into_iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| d.error)
            .collect()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarizerConfig`] and
/// returns zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"budget_shares"`).
    fn name(&self) -> &str;

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarizerConfig`] and
/// collects all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(BudgetSharesRule));
        engine.add_rule(Box::new(MultipliersRule));
        engine.add_rule(Box::new(ScoringWindowsRule));
        engine.add_rule(Box::new(DefaultBudgetRule));
        engine.add_rule(Box::new(LanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `config` and return the collected report.
    pub fn validate(&self, config: &SummarizerConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(config));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Budget shares in (0, 1] and ordered ─────────────────────────────────

struct BudgetSharesRule;

impl ValidationRule for BudgetSharesRule {
    fn name(&self) -> &str {
        "budget_shares"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let budget = &config.budget;
        let mut out = Vec::new();

        let shares = [
            ("lead_share", budget.lead_share),
            ("core_share", budget.core_share),
        ];
        for (field, value) in shares {
            if !(value > 0.0 && value <= 1.0) {
                out.push(ValidationDiagnostic::error(
                    ConfigError::new(
                        ErrorCode::InvalidValue,
                        format!("/budget/{field}"),
                        format!("{field} must be in (0, 1], got {value}"),
                    )
                    .with_hint("Shares are fractions of the word budget"),
                ));
            }
        }

        if budget.lead_share > budget.core_share {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::InvalidRange,
                    "/budget/lead_share",
                    format!(
                        "lead_share ({}) exceeds core_share ({})",
                        budget.lead_share, budget.core_share
                    ),
                )
                .with_hint("core_share covers the lead-in and core phases together"),
            ));
        }

        out
    }
}

// ─── 2. Multipliers finite and positive ─────────────────────────────────────

struct MultipliersRule;

impl ValidationRule for MultipliersRule {
    fn name(&self) -> &str {
        "multipliers"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let scoring = &config.scoring;
        let mut out = Vec::new();

        let checks = [
            ("lead_bonus", scoring.lead_bonus),
            ("tail_bonus", scoring.tail_bonus),
            ("length_bonus", scoring.length_bonus),
        ];
        for (field, value) in checks {
            let path = format!("/scoring/{field}");
            if !value.is_finite() || value <= 0.0 {
                out.push(ValidationDiagnostic::error(ConfigError::new(
                    ErrorCode::InvalidValue,
                    path,
                    format!("{field} must be a finite positive number, got {value}"),
                )));
            } else if value < 1.0 {
                out.push(ValidationDiagnostic::warning(
                    ConfigError::new(
                        ErrorCode::InvalidValue,
                        path,
                        format!("{field} is {value}, which penalizes instead of boosting"),
                    )
                    .with_hint("Use a value of 1.0 or more to boost"),
                ));
            }
        }

        out
    }
}

// ─── 3. Edge divisor and ideal length range ─────────────────────────────────

struct ScoringWindowsRule;

impl ValidationRule for ScoringWindowsRule {
    fn name(&self) -> &str {
        "scoring_windows"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let scoring = &config.scoring;
        let mut out = Vec::new();

        if scoring.edge_divisor == 0 {
            out.push(ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::InvalidValue,
                "/scoring/edge_divisor",
                "edge_divisor must be greater than 0",
            )));
        }

        if scoring.ideal_min_words > scoring.ideal_max_words {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::InvalidRange,
                    "/scoring/ideal_min_words",
                    format!(
                        "ideal_min_words ({}) exceeds ideal_max_words ({})",
                        scoring.ideal_min_words, scoring.ideal_max_words
                    ),
                )
                .with_hint("Swap the bounds or widen the range"),
            ));
        }

        out
    }
}

// ─── 4. Default budget positive ─────────────────────────────────────────────

struct DefaultBudgetRule;

impl ValidationRule for DefaultBudgetRule {
    fn name(&self) -> &str {
        "default_budget"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        if config.default_max_words == 0 {
            vec![ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::InvalidValue,
                    "/default_max_words",
                    "default_max_words must be greater than 0",
                )
                .with_hint("Omit the field to use 300"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 5. Stopword language recognized ────────────────────────────────────────

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        match config.language.as_deref() {
            Some(language) if !is_supported_language(language) => {
                vec![ValidationDiagnostic::warning(
                    ConfigError::new(
                        ErrorCode::UnsupportedLanguage,
                        "/language",
                        format!("no stopword list for \"{language}\"; English will be used"),
                    )
                    .with_hint("Use an ISO 639-1 code such as \"pt\" or \"en\""),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 6. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    ConfigError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let strict = config.strict;
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &config.unknown_fields, strict));
        out.extend(Self::check_unknowns(
            "/segmentation",
            &config.segmentation.unknown_fields,
            strict,
        ));
        out.extend(Self::check_unknowns(
            "/scoring",
            &config.scoring.unknown_fields,
            strict,
        ));
        out.extend(Self::check_unknowns(
            "/budget",
            &config.budget.unknown_fields,
            strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> SummarizerConfig {
        SummarizerConfig::from_json(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    fn paths<'a>(errors: impl Iterator<Item = &'a ConfigError>) -> Vec<&'a str> {
        errors.map(|e| e.path.as_str()).collect()
    }

    // ─── Valid configs ──────────────────────────────────────────────────

    #[test]
    fn test_default_config_is_clean() {
        let report = engine().validate(&SummarizerConfig::default());
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_supported_language_is_clean() {
        let report = engine().validate(&config(r#"{ "language": "Portuguese" }"#));
        assert!(report.is_empty());
    }

    #[test]
    fn test_default_rule_set() {
        assert_eq!(
            engine().rule_names(),
            vec![
                "budget_shares",
                "multipliers",
                "scoring_windows",
                "default_budget",
                "language",
                "unknown_fields",
            ]
        );
    }

    // ─── Budget shares ──────────────────────────────────────────────────

    #[test]
    fn test_share_out_of_range() {
        let report = engine().validate(&config(r#"{ "budget": { "core_share": 1.5 } }"#));
        assert!(report.has_errors());
        assert_eq!(paths(report.errors()), vec!["/budget/core_share"]);
    }

    #[test]
    fn test_zero_share_is_an_error() {
        let report = engine().validate(&config(r#"{ "budget": { "lead_share": 0.0 } }"#));
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidValue);
        assert_eq!(err.path, "/budget/lead_share");
    }

    #[test]
    fn test_shares_out_of_order() {
        let report = engine().validate(&config(
            r#"{ "budget": { "lead_share": 0.9, "core_share": 0.5 } }"#,
        ));
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidRange);
        assert!(err.hint.is_some());
    }

    // ─── Multipliers ────────────────────────────────────────────────────

    #[test]
    fn test_negative_multiplier_is_an_error() {
        let report = engine().validate(&config(r#"{ "scoring": { "tail_bonus": -1.0 } }"#));
        assert_eq!(paths(report.errors()), vec!["/scoring/tail_bonus"]);
    }

    #[test]
    fn test_non_finite_multiplier_is_an_error() {
        let mut cfg = SummarizerConfig::default();
        cfg.scoring.length_bonus = f64::NAN;
        let report = engine().validate(&cfg);
        assert_eq!(paths(report.errors()), vec!["/scoring/length_bonus"]);
    }

    #[test]
    fn test_dampening_multiplier_is_a_warning() {
        let report = engine().validate(&config(r#"{ "scoring": { "lead_bonus": 0.5 } }"#));
        assert!(report.is_valid());
        assert_eq!(paths(report.warnings()), vec!["/scoring/lead_bonus"]);
    }

    // ─── Scoring windows ────────────────────────────────────────────────

    #[test]
    fn test_zero_edge_divisor() {
        let report = engine().validate(&config(r#"{ "scoring": { "edge_divisor": 0 } }"#));
        assert_eq!(paths(report.errors()), vec!["/scoring/edge_divisor"]);
    }

    #[test]
    fn test_inverted_ideal_range() {
        let report = engine().validate(&config(
            r#"{ "scoring": { "ideal_min_words": 30, "ideal_max_words": 10 } }"#,
        ));
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidRange);
    }

    // ─── Default budget ─────────────────────────────────────────────────

    #[test]
    fn test_zero_default_budget() {
        let report = engine().validate(&config(r#"{ "default_max_words": 0 }"#));
        assert_eq!(paths(report.errors()), vec!["/default_max_words"]);
    }

    // ─── Language ───────────────────────────────────────────────────────

    #[test]
    fn test_unknown_language_is_a_warning() {
        let report = engine().validate(&config(r#"{ "language": "klingon" }"#));
        assert!(report.is_valid());
        let warning = report.warnings().next().unwrap();
        assert_eq!(warning.code, ErrorCode::UnsupportedLanguage);
    }

    // ─── Unknown fields ─────────────────────────────────────────────────

    #[test]
    fn test_unknown_fields_warn_when_lenient() {
        let report = engine().validate(&config(
            r#"{ "colour": 1, "budget": { "lead_shares": 0.2 } }"#,
        ));
        assert!(report.is_valid());
        assert_eq!(
            paths(report.warnings()),
            vec!["/colour", "/budget/lead_shares"]
        );
    }

    #[test]
    fn test_unknown_fields_fail_when_strict() {
        let report = engine().validate(&config(
            r#"{ "strict": true, "scoring": { "lead_bonsu": 2.0 } }"#,
        ));
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnknownField);
        assert_eq!(err.path, "/scoring/lead_bonsu");
    }

    // ─── Engine behaviour ───────────────────────────────────────────────

    #[test]
    fn test_all_errors_collected() {
        let report = engine().validate(&config(
            r#"{
                "default_max_words": 0,
                "budget": { "core_share": 2.0 },
                "scoring": { "edge_divisor": 0 }
            }"#,
        ));
        assert_eq!(report.errors().count(), 3);
    }

    #[test]
    fn test_into_errors_drops_warnings() {
        let report = engine().validate(&config(
            r#"{ "language": "klingon", "default_max_words": 0 }"#,
        ));
        let errors = report.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "/default_max_words");
    }

    #[test]
    fn test_custom_rule() {
        struct NoEnglish;
        impl ValidationRule for NoEnglish {
            fn name(&self) -> &str {
                "no_english"
            }
            fn validate(&self, config: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
                if config.language.as_deref() == Some("en") {
                    vec![ValidationDiagnostic::error(ConfigError::new(
                        ErrorCode::UnsupportedLanguage,
                        "/language",
                        "english is not allowed here",
                    ))]
                } else {
                    vec![]
                }
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(NoEnglish));
        assert!(engine.validate(&config(r#"{ "language": "en" }"#)).has_errors());
        assert!(engine.validate(&config(r#"{ "language": "pt" }"#)).is_valid());
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = engine().validate(&config(r#"{ "default_max_words": 0 }"#));
        let json = serde_json::to_value(&report).unwrap();
        let diag = &json["diagnostics"][0];
        assert_eq!(diag["severity"], "error");
        assert_eq!(diag["code"], "invalid_value");
        assert_eq!(diag["path"], "/default_max_words");
    }
}
