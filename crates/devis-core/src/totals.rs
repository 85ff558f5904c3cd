//! # Totals Calculator
//!
//! Turns a list of line items and a tax rate into the four figures printed
//! at the bottom of a quote.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  LineItem[0] ──► q × p ──┐                                              │
//! │  LineItem[1] ──► q × p ──┼──► Σ in input order ──► pre_tax_total (HT)   │
//! │  LineItem[n] ──► q × p ──┘                              │               │
//! │                                                          ├──► × rate    │
//! │                                                          │    tax (TVA) │
//! │                                                          ▼       │      │
//! │                                      total_with_tax (TTC) = HT + TVA    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator never fails and never validates: blank lines count as zero
//! and negative lines subtract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{LineItem, TaxRate};

/// Result of [`compute_totals`].
///
/// ## Invariants
/// - `per_line_totals.len()` equals the number of input lines, same order
/// - `pre_tax_total` is the sum of `per_line_totals`
/// - `total_with_tax == pre_tax_total + tax_amount`, computed from those two
///   fields and nothing else
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsResult {
    /// quantity × unit price for each input line.
    #[ts(as = "Vec<String>")]
    pub per_line_totals: Vec<Decimal>,

    /// Montant HT.
    #[ts(as = "String")]
    pub pre_tax_total: Decimal,

    /// TVA.
    #[ts(as = "String")]
    pub tax_amount: Decimal,

    /// Montant TTC.
    #[ts(as = "String")]
    pub total_with_tax: Decimal,

    /// Rate the tax was computed with.
    pub tax_rate: TaxRate,
}

impl TotalsResult {
    /// Line total `index` rounded for display.
    pub fn line_money(&self, index: usize) -> Option<Money> {
        self.per_line_totals.get(index).copied().map(Money::from_decimal)
    }

    /// Pre-tax total rounded for display.
    pub fn pre_tax_money(&self) -> Money {
        Money::from_decimal(self.pre_tax_total)
    }

    /// Tax amount rounded for display.
    pub fn tax_money(&self) -> Money {
        Money::from_decimal(self.tax_amount)
    }

    /// Tax-inclusive total rounded for display.
    pub fn total_money(&self) -> Money {
        Money::from_decimal(self.total_with_tax)
    }
}

/// Computes per-line totals, HT, TVA and TTC.
///
/// Lines are summed in the order given, so the same input always yields the
/// same result. Arithmetic saturates instead of overflowing.
///
/// ## Example
/// ```rust
/// use devis_core::{compute_totals, LineItem, TaxRate};
/// use rust_decimal::Decimal;
///
/// let items = [
///     LineItem::new(Decimal::from(1), Decimal::from(50)),
///     LineItem::new(Decimal::from(1), Decimal::from(2500)),
///     LineItem::blank(),
/// ];
/// let totals = compute_totals(&items, TaxRate::standard());
///
/// assert_eq!(totals.per_line_totals.len(), 3);
/// assert_eq!(totals.pre_tax_total, Decimal::from(2550));
/// assert_eq!(totals.tax_amount, Decimal::from(510));
/// assert_eq!(totals.total_with_tax, Decimal::from(3060));
/// ```
pub fn compute_totals(items: &[LineItem], tax_rate: TaxRate) -> TotalsResult {
    let per_line_totals: Vec<Decimal> = items.iter().map(LineItem::line_total).collect();

    let pre_tax_total = per_line_totals
        .iter()
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(*line));
    let tax_amount = pre_tax_total.saturating_mul(tax_rate.fraction());
    let total_with_tax = pre_tax_total.saturating_add(tax_amount);

    debug!(
        lines = items.len(),
        %pre_tax_total,
        %tax_amount,
        %total_with_tax,
        rate = %tax_rate,
        "Computed quote totals"
    );

    TotalsResult {
        per_line_totals,
        pre_tax_total,
        tax_amount,
        total_with_tax,
        tax_rate,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
