//! Stable, machine-readable codes for configuration diagnostics.

use serde::Serialize;

/// Diagnostic code attached to every [`ConfigError`](super::errors::ConfigError).
///
/// Codes serialize as `snake_case` strings and are part of the public
/// contract; messages and hints are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A value is outside its allowed domain (zero, negative, NaN)
    InvalidValue,
    /// Two related values are out of order
    InvalidRange,
    /// The stopword language is not recognized
    UnsupportedLanguage,
    /// A field is not part of the configuration schema
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidValue => "invalid_value",
            ErrorCode::InvalidRange => "invalid_range",
            ErrorCode::UnsupportedLanguage => "unsupported_language",
            ErrorCode::UnknownField => "unknown_field",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
