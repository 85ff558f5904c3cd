//! # Validation Module
//!
//! Checks on the quote form, run by the caller before any total is computed.
//! The calculator itself accepts whatever it is given.
//!
//! ## Where validation sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quote request flow                                 │
//! │                                                                         │
//! │  Request JSON ──► serde (shape, types)                                 │
//! │                        │                                                │
//! │                        ▼                                                │
//! │               validate_quote_form  ← THIS MODULE                       │
//! │               ├── required header fields                               │
//! │               ├── e-mail / phone format                                │
//! │               └── lines: count, non-negative values                    │
//! │                        │                                                │
//! │                        ▼  (no errors)                                  │
//! │               compute_totals ──► spell_money ──► placeholders          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use devis_core::validation::{validate_email, validate_phone};
//!
//! assert!(validate_email("contact@cabinet.ma").is_ok());
//! assert!(validate_phone("06 12 34 56 78").is_ok());
//! ```

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

use crate::error::ValidationError;
use crate::quote::QuoteForm;
use crate::types::LineItem;
use crate::MAX_QUOTE_LINES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const PHONE_PATTERN: &str = r"^(\+212|0)[0-9]{9}$";

/// Longest accepted reference or quote number.
const MAX_IDENTIFIER_LEN: usize = 50;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid e-mail regex"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("valid phone regex"))
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an e-mail address.
///
/// ## Example
/// ```rust
/// use devis_core::validation::validate_email;
///
/// assert!(validate_email("a.b@example.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email_regex().is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "client_email".to_string(),
            reason: "not a valid e-mail address".to_string(),
        })
    }
}

/// Validates a Moroccan phone number.
///
/// Spaces and dashes are ignored. An empty value is accepted: the phone
/// number is optional.
///
/// ## Example
/// ```rust
/// use devis_core::validation::validate_phone;
///
/// assert!(validate_phone("+212 612-345-678").is_ok());
/// assert!(validate_phone("").is_ok());
/// assert!(validate_phone("12345").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let compact: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if compact.is_empty() || phone_regex().is_match(&compact) {
        return Ok(());
    }

    Err(ValidationError::InvalidFormat {
        field: "client_phone".to_string(),
        reason: "expected +212 or 0 followed by 9 digits".to_string(),
    })
}

/// Validates a required identifier (reference, quote number).
fn validate_identifier(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_IDENTIFIER_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_IDENTIFIER_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a tax rate given as a fraction.
///
/// ## Rules
/// - Must be between 0 and 1 inclusive (0% to 100%)
pub fn validate_tax_rate(rate: Decimal) -> ValidationResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 1,
        });
    }

    Ok(())
}

/// Validates one line of the form. `index` is zero-based and only used to
/// name the offending field.
///
/// ## Rules
/// - Quantity, when present, must be zero or more
/// - Unit price, when present, must be zero or more
pub fn validate_line_item(index: usize, item: &LineItem) -> ValidationResult<()> {
    if item.quantity.is_some_and(|q| q < Decimal::ZERO) {
        return Err(ValidationError::MustBeNonNegative {
            field: format!("lines[{}].quantity", index),
        });
    }

    if item.unit_price.is_some_and(|p| p < Decimal::ZERO) {
        return Err(ValidationError::MustBeNonNegative {
            field: format!("lines[{}].unit_price", index),
        });
    }

    Ok(())
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates the whole form and returns every problem found, in field order.
/// An empty vector means the form is acceptable.
///
/// ## Rules
/// ```text
/// ┌──────────────────┬──────────────────────────────────────────────┐
/// │ reference        │ required, ≤ 50 chars                         │
/// │ quote_number     │ required, ≤ 50 chars                         │
/// │ client_email     │ e-mail format, when present and non-empty    │
/// │ client_phone     │ Moroccan format, when present                │
/// │ lines            │ 1..=MAX_QUOTE_LINES, each non-negative,      │
/// │                  │ one line per service                         │
/// │ tax_rate         │ 0..=1, when present                          │
/// │ report_count     │ ≥ 1                                          │
/// └──────────────────┴──────────────────────────────────────────────┘
/// ```
pub fn validate_quote_form(form: &QuoteForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = validate_identifier("reference", &form.reference) {
        errors.push(e);
    }
    if let Err(e) = validate_identifier("quote_number", &form.quote_number) {
        errors.push(e);
    }

    if let Some(email) = form.client_email.as_deref().filter(|e| !e.trim().is_empty()) {
        if let Err(e) = validate_email(email) {
            errors.push(e);
        }
    }
    if let Some(phone) = form.client_phone.as_deref() {
        if let Err(e) = validate_phone(phone) {
            errors.push(e);
        }
    }

    if form.lines.is_empty() {
        errors.push(ValidationError::Required {
            field: "lines".to_string(),
        });
    } else if form.lines.len() > MAX_QUOTE_LINES {
        errors.push(ValidationError::OutOfRange {
            field: "lines".to_string(),
            min: 1,
            max: MAX_QUOTE_LINES as i64,
        });
    }

    let mut seen = Vec::with_capacity(form.lines.len());
    for (index, line) in form.lines.iter().enumerate() {
        if seen.contains(&line.service) {
            errors.push(ValidationError::InvalidFormat {
                field: format!("lines[{}].service", index),
                reason: format!("{} appears more than once", line.service),
            });
        }
        seen.push(line.service);

        let item = LineItem {
            quantity: line.quantity,
            unit_price: line.unit_price,
        };
        if let Err(e) = validate_line_item(index, &item) {
            errors.push(e);
        }
    }

    if let Some(rate) = form.tax_rate {
        if let Err(e) = validate_tax_rate(rate.fraction()) {
            errors.push(e);
        }
    }

    if form.report_count < 1 {
        errors.push(ValidationError::MustBePositive {
            field: "report_count".to_string(),
        });
    }

    errors
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Service;
    use crate::quote::QuoteLine;
    use crate::types::TaxRate;
    use rust_decimal_macros::dec;

    fn valid_form() -> QuoteForm {
        serde_json::from_value(serde_json::json!({
            "reference": "CAM-2025-001",
            "quote_number": "DEV-001",
            "lines": [{ "service": "cc", "quantity": 1, "unit_price": 50 }]
        }))
        .unwrap()
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("contact@cabinet.ma").is_ok());
        assert!(validate_email("first.last+tag@sub.example.org").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.ma").is_err());
        assert!(validate_email("x@domain").is_err());
        assert!(validate_email("x@domain.c").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0612345678").is_ok());
        assert!(validate_phone("+212612345678").is_ok());
        assert!(validate_phone("06-12-34-56-78").is_ok());
        assert!(validate_phone("   ").is_ok());

        assert!(validate_phone("061234567").is_err());
        assert!(validate_phone("+33612345678").is_err());
        assert!(validate_phone("06123456789").is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(dec!(0)).is_ok());
        assert!(validate_tax_rate(dec!(0.20)).is_ok());
        assert!(validate_tax_rate(dec!(1)).is_ok());

        assert!(validate_tax_rate(dec!(-0.01)).is_err());
        assert!(validate_tax_rate(dec!(20)).is_err());
    }

    #[test]
    fn test_validate_line_item() {
        assert!(validate_line_item(0, &LineItem::blank()).is_ok());
        assert!(validate_line_item(0, &LineItem::new(dec!(0), dec!(0))).is_ok());

        let err = validate_line_item(3, &LineItem::new(dec!(-1), dec!(50))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MustBeNonNegative {
                field: "lines[3].quantity".to_string()
            }
        );

        let err = validate_line_item(0, &LineItem::new(dec!(1), dec!(-50))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MustBeNonNegative {
                field: "lines[0].unit_price".to_string()
            }
        );
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_quote_form(&valid_form()).is_empty());
    }

    #[test]
    fn test_form_collects_every_error() {
        let mut form = valid_form();
        form.reference = "  ".to_string();
        form.quote_number = String::new();
        form.client_email = Some("nope".to_string());
        form.report_count = 0;
        form.lines.push(QuoteLine {
            service: Service::PropertyValuation,
            quantity: Some(dec!(-2)),
            unit_price: None,
        });

        let errors = validate_quote_form(&form);
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors[0],
            ValidationError::Required {
                field: "reference".to_string()
            }
        );
        assert!(errors.contains(&ValidationError::MustBeNonNegative {
            field: "lines[1].quantity".to_string()
        }));
        assert!(errors.contains(&ValidationError::MustBePositive {
            field: "report_count".to_string()
        }));
    }

    #[test]
    fn test_tax_rate_override_is_range_checked() {
        let mut form = valid_form();
        form.tax_rate = Some(TaxRate::from_bps(1000));
        assert!(validate_quote_form(&form).is_empty());

        form.tax_rate = Some(TaxRate::from_bps(25_000));
        assert_eq!(
            validate_quote_form(&form),
            vec![ValidationError::OutOfRange {
                field: "tax_rate".to_string(),
                min: 0,
                max: 1
            }]
        );
    }

    #[test]
    fn test_empty_email_is_ignored() {
        let mut form = valid_form();
        form.client_email = Some(String::new());
        assert!(validate_quote_form(&form).is_empty());
    }

    #[test]
    fn test_line_count_bounds() {
        let mut form = valid_form();
        form.lines.clear();
        assert_eq!(
            validate_quote_form(&form),
            vec![ValidationError::Required {
                field: "lines".to_string()
            }]
        );

        let line = QuoteLine {
            service: Service::CoOwnershipCertificate,
            quantity: Some(dec!(1)),
            unit_price: None,
        };
        form.lines = vec![line; MAX_QUOTE_LINES + 1];
        let errors = validate_quote_form(&form);
        assert!(matches!(errors[0], ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_duplicate_service_is_rejected() {
        let mut form = valid_form();
        form.lines.push(QuoteLine {
            service: Service::CoOwnershipCertificate,
            quantity: Some(dec!(3)),
            unit_price: None,
        });
        assert_eq!(
            validate_quote_form(&form),
            vec![ValidationError::InvalidFormat {
                field: "lines[1].service".to_string(),
                reason: "CC appears more than once".to_string(),
            }]
        );
    }
}
