//! # Domain Types
//!
//! Core value types of a quote.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    TaxRate      │   │     Money       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  quantity?      │   │  fraction       │   │  centimes (i64) │       │
//! │  │  unit_price?    │   │  0.20 = 20 %    │   │  display only   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate stored as a fraction of the pre-tax amount.
///
/// 0.20 means 20 % TVA. Serialized as a decimal string (`"0.20"`) and
/// accepted from JSON numbers or strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct TaxRate(#[ts(as = "String")] Decimal);

impl TaxRate {
    /// Creates a tax rate from basis points (2000 bps = 20 %).
    ///
    /// Not range-checked; see [`crate::validation::validate_tax_rate`].
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        TaxRate(Decimal::new(i64::from(bps), 4).normalize())
    }

    /// Creates a tax rate from a fraction, which must lie in [0, 1].
    ///
    /// ## Example
    /// ```rust
    /// use devis_core::TaxRate;
    /// use rust_decimal::Decimal;
    ///
    /// let rate = TaxRate::from_fraction(Decimal::new(20, 2)).unwrap();
    /// assert_eq!(rate.percentage(), Decimal::new(20, 0));
    /// assert!(TaxRate::from_fraction(Decimal::new(12, 1)).is_err()); // 1.2
    /// ```
    pub fn from_fraction(fraction: Decimal) -> CoreResult<Self> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(CoreError::InvalidTaxRate { rate: fraction });
        }
        Ok(TaxRate(fraction.normalize()))
    }

    /// Creates a tax rate from a percentage (20 → 0.20).
    pub fn from_percentage(percentage: Decimal) -> CoreResult<Self> {
        Self::from_fraction(percentage / Decimal::ONE_HUNDRED)
    }

    /// The standard Moroccan TVA rate: 20 %.
    #[inline]
    pub fn standard() -> Self {
        Self::from_bps(crate::STANDARD_TVA_BPS)
    }

    /// Zero tax rate.
    #[inline]
    pub fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    /// Returns the rate as a fraction (0.2).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage (20).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::standard()
    }
}

/// Renders as a percentage label, e.g. `20%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One billable line: a quantity of something at a unit price.
///
/// ## Missing Fields
/// A form that is still being filled in has blank cells. Both fields are
/// optional, and a line whose quantity or price is absent *or zero* is worth
/// exactly zero. That is the contract, not an error: totals shown before the
/// user finishes typing must not fail.
///
/// Negative values are accepted and propagate arithmetically; rejecting them
/// is the job of [`crate::validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Quantity (integer or decimal).
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub quantity: Option<Decimal>,

    /// Price of one unit, pre-tax.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub unit_price: Option<Decimal>,
}

impl LineItem {
    /// Creates a fully filled-in line.
    pub fn new(quantity: Decimal, unit_price: Decimal) -> Self {
        LineItem {
            quantity: Some(quantity),
            unit_price: Some(unit_price),
        }
    }

    /// A line with nothing filled in yet.
    pub fn blank() -> Self {
        LineItem::default()
    }

    /// quantity × unit_price, or zero when either is absent or zero.
    ///
    /// ## Example
    /// ```rust
    /// use devis_core::LineItem;
    /// use rust_decimal::Decimal;
    ///
    /// let line = LineItem::new(Decimal::from(3), Decimal::from(60));
    /// assert_eq!(line.line_total(), Decimal::from(180));
    ///
    /// let unpriced = LineItem { quantity: Some(Decimal::from(3)), unit_price: None };
    /// assert_eq!(unpriced.line_total(), Decimal::ZERO);
    /// ```
    pub fn line_total(&self) -> Decimal {
        match (self.quantity, self.unit_price) {
            (Some(quantity), Some(price)) if !quantity.is_zero() && !price.is_zero() => {
                quantity.saturating_mul(price)
            }
            _ => Decimal::ZERO,
        }
    }

    /// True when the line contributes nothing to the quote.
    pub fn is_empty(&self) -> bool {
        self.quantity.map_or(true, |q| q.is_zero())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(2000);
        assert_eq!(rate.fraction(), dec!(0.2));
        assert_eq!(rate.percentage(), dec!(20));
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(dec!(7)).unwrap();
        assert_eq!(rate.fraction(), dec!(0.07));
        assert!(TaxRate::from_percentage(dec!(-1)).is_err());
        assert!(TaxRate::from_percentage(dec!(100)).is_ok());
    }

    #[test]
    fn test_tax_rate_bounds() {
        assert!(TaxRate::from_fraction(dec!(0)).is_ok());
        assert!(TaxRate::from_fraction(dec!(1)).is_ok());
        assert!(matches!(
            TaxRate::from_fraction(dec!(1.01)),
            Err(CoreError::InvalidTaxRate { .. })
        ));
    }

    #[test]
    fn test_tax_rate_default_is_standard() {
        assert_eq!(TaxRate::default(), TaxRate::from_bps(2000));
        assert_eq!(TaxRate::default().to_string(), "20%");
    }

    #[test]
    fn test_line_total_missing_or_zero_is_zero() {
        assert_eq!(LineItem::blank().line_total(), Decimal::ZERO);
        assert_eq!(LineItem::new(dec!(0), dec!(50)).line_total(), Decimal::ZERO);
        assert_eq!(LineItem::new(dec!(4), dec!(0)).line_total(), Decimal::ZERO);
        let no_qty = LineItem {
            quantity: None,
            unit_price: Some(dec!(75)),
        };
        assert_eq!(no_qty.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_line_total_decimal_and_negative() {
        assert_eq!(LineItem::new(dec!(2.5), dec!(40)).line_total(), dec!(100.0));
        assert_eq!(LineItem::new(dec!(-1), dec!(50)).line_total(), dec!(-50));
    }

    #[test]
    fn test_line_item_deserializes_numbers_and_blanks() {
        let line: LineItem =
            serde_json::from_str(r#"{"quantity": 2, "unit_price": "2500.00"}"#).unwrap();
        assert_eq!(line.line_total(), dec!(5000));

        let blank: LineItem = serde_json::from_str("{}").unwrap();
        assert!(blank.is_empty());
    }
}
