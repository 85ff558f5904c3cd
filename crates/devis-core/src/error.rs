//! # Error Types
//!
//! Domain-specific error types for devis-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  devis-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── SpellError       - Amount cannot be written in words              │
//! │  └── ValidationError  - Form input rejected before calculation         │
//! │                                                                         │
//! │  devis-cli errors (app crate)                                          │
//! │  ├── ConfigError      - Bad devis.toml / environment override          │
//! │  └── AppError         - What the caller sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError / SpellError → CoreError → AppError → stderr    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The totals calculator has no error type: it never fails.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The tax-inclusive total could not be written in words.
    #[error("Cannot spell amount: {0}")]
    Spell(#[from] SpellError),

    /// Tax rate is not a fraction in [0, 1].
    #[error("Invalid tax rate {rate}: must be a fraction between 0 and 1")]
    InvalidTaxRate { rate: Decimal },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Spell Error
// =============================================================================

/// Failures of the amount speller.
///
/// The speller never returns placeholder text such as `"NOMBRE TROP GRAND"`
/// in place of words; every failure is one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    /// Amount exceeds what the lexicon can write.
    #[error("{value} is above the largest spellable amount ({max})")]
    OutOfRange { value: u64, max: u64 },

    /// Negative amounts have no spelling.
    #[error("Negative amount {amount} cannot be written in words")]
    Negative { amount: Money },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These come from the quote form before any total is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e-mail, phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
