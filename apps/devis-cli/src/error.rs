//! # CLI Error Type
//!
//! What the caller of `devis` sees when a quote can't be produced.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  read request ── io::Error ──────────────┐                              │
//! │  parse JSON ──── serde_json::Error ──────┤                              │
//! │  load config ─── ConfigError ────────────┼──► AppError ──► stderr JSON │
//! │  validate ────── Vec<ValidationError> ───┤         exit status 1        │
//! │  spell total ─── CoreError::Spell ───────┘                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "reference is required; lines[0].quantity must not be negative"
//! }
//! ```

use devis_core::{CoreError, SpellError, ValidationError};
use serde::Serialize;

use crate::config::ConfigError;

/// Error printed by the binary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code.
    pub code: ErrorCode,

    /// Human-readable error message.
    pub message: String,
}

/// Error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The request or a field in it was rejected.
    ValidationError,

    /// The tax-inclusive total can't be written in words.
    AmountNotSpellable,

    /// devis.toml or an environment override is invalid.
    ConfigError,

    /// The request is not valid JSON for a quote.
    InvalidRequest,

    /// Reading input or writing output failed.
    IoError,

    /// Bad command-line usage.
    Usage,
}

impl AppError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Usage, message)
    }

    /// Joins every validation failure into one message.
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// JSON form written to stderr.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":"INTERNAL","message":{:?}}}"#, self.message)
        })
    }
}

/// Converts core errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Spell(e) => AppError::from(e),
            CoreError::InvalidTaxRate { .. } => {
                AppError::new(ErrorCode::ValidationError, err.to_string())
            }
            CoreError::Validation(e) => AppError::new(ErrorCode::ValidationError, e.to_string()),
        }
    }
}

impl From<SpellError> for AppError {
    fn from(err: SpellError) -> Self {
        AppError::new(ErrorCode::AmountNotSpellable, err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return AppError::new(ErrorCode::IoError, err.to_string());
        }
        AppError::new(ErrorCode::InvalidRequest, format!("Invalid quote request: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_screaming_code() {
        let err = AppError::usage("missing --input value");
        let json = err.to_json();
        assert!(json.contains(r#""code":"USAGE""#));
        assert!(json.contains("missing --input value"));
    }

    #[test]
    fn test_spell_error_code() {
        let err: AppError = CoreError::from(SpellError::OutOfRange {
            value: 1_200_000,
            max: 999_999,
        })
        .into();
        assert_eq!(err.code, ErrorCode::AmountNotSpellable);
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = AppError::from_validation(&[
            ValidationError::Required {
                field: "reference".to_string(),
            },
            ValidationError::MustBePositive {
                field: "report_count".to_string(),
            },
        ]);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "reference is required; report_count must be positive"
        );
    }

    #[test]
    fn test_bad_json_is_invalid_request() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }
}
