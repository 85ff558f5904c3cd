//! # Money Module
//!
//! Provides the `Money` type used to *present* amounts on a quote.
//!
//! ## Calculation vs. Presentation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  compute_totals()            Decimal, full precision                   │
//! │     2.5 × 33.333 = 83.3325                                              │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  Money::from_decimal()       rounded to centimes (half away from 0)    │
//! │     8333 centimes                                                       │
//! │          │                                                              │
//! │          ├──► "83.33"        template placeholder                       │
//! │          ├──► "83.33 DH"     summary line                               │
//! │          └──► 83             whole units for the amount in words       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use devis_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let total = Money::from_decimal(Decimal::new(30_6000, 2)); // 3060.00
//! assert_eq!(total.to_string(), "3060.00");
//! assert_eq!(total.format_with_currency("DH"), "3,060.00 DH");
//! assert_eq!(total.whole_units(), 3060);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

/// Number of fractional digits shown on a quote.
pub const DISPLAY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centimes (1/100 of the currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative line items are not rejected by the calculator,
///   so their presentation must be representable too
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - Only built from already-computed decimals; arithmetic happens upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centimes.
    ///
    /// ## Example
    /// ```rust
    /// use devis_core::money::Money;
    ///
    /// let price = Money::from_centimes(5000); // 50.00
    /// assert_eq!(price.centimes(), 5000);
    /// ```
    #[inline]
    pub const fn from_centimes(centimes: i64) -> Self {
        Money(centimes)
    }

    /// Rounds a decimal amount to centimes, midpoints away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use devis_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::from_decimal(Decimal::new(12345, 3)).centimes(), 1235);  // 12.345
    /// assert_eq!(Money::from_decimal(Decimal::new(-12345, 3)).centimes(), -1235);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Self {
        let mut rounded =
            amount.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_DECIMALS);
        let centimes = rounded.mantissa().clamp(i64::MIN as i128, i64::MAX as i128);
        Money(centimes as i64)
    }

    /// Returns the value in centimes.
    #[inline]
    pub const fn centimes(&self) -> i64 {
        self.0
    }

    /// Returns the whole currency units, truncated toward zero.
    ///
    /// This is the integer written out in words on the quote.
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centimes portion (always 0-99).
    #[inline]
    pub const fn centimes_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Converts back to an exact decimal with two fractional digits.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, DISPLAY_DECIMALS)
    }

    /// Formats with thousands separators and a trailing currency label.
    ///
    /// ## Example
    /// ```rust
    /// use devis_core::money::Money;
    ///
    /// let amount = Money::from_centimes(123_456_780);
    /// assert_eq!(amount.format_with_currency("DH"), "1,234,567.80 DH");
    /// ```
    pub fn format_with_currency(&self, currency: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = group_thousands(self.whole_units().unsigned_abs());
        format!("{}{}.{:02} {}", sign, whole, self.centimes_part(), currency)
    }
}

/// Inserts a comma every three digits, from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering, as written into the document template.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.whole_units().unsigned_abs(),
            self.centimes_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::from_decimal(amount)
    }
}

impl Add for Money {
    type Output = Self;

    /// Saturates at the `i64` bounds.
    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
    fn test_from_decimal_rounds_half_away_from_zero() {
        assert_eq!(Money::from_decimal(dec!(83.3325)).centimes(), 8333);
        assert_eq!(Money::from_decimal(dec!(0.005)).centimes(), 1);
        assert_eq!(Money::from_decimal(dec!(-0.005)).centimes(), -1);
        assert_eq!(Money::from_decimal(dec!(2500)).centimes(), 250_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_centimes(306_000).to_string(), "3060.00");
        assert_eq!(Money::from_centimes(5).to_string(), "0.05");
        assert_eq!(Money::from_centimes(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_format_with_currency() {
        assert_eq!(Money::from_centimes(0).format_with_currency("DH"), "0.00 DH");
        assert_eq!(Money::from_centimes(99_999).format_with_currency("DH"), "999.99 DH");
        assert_eq!(Money::from_centimes(100_000).format_with_currency("DH"), "1,000.00 DH");
        assert_eq!(
            Money::from_centimes(-123_456_700).format_with_currency("DH"),
            "-1,234,567.00 DH"
        );
    }

    #[test]
    fn test_whole_units_truncates() {
        assert_eq!(Money::from_centimes(306_099).whole_units(), 3060);
        assert_eq!(Money::from_centimes(-199).whole_units(), -1);
    }

    #[test]
    fn test_to_decimal_round_trips_display_value() {
        let money = Money::from_decimal(dec!(12.3456));
        assert_eq!(money.to_decimal(), dec!(12.35));
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, -50]
            .into_iter()
            .map(Money::from_centimes)
            .sum();
        assert_eq!(total.centimes(), 300);
    }

    #[test]
    fn test_add_saturates() {
        let max = Money::from_centimes(i64::MAX);
        assert_eq!((max + Money::from_centimes(1)).centimes(), i64::MAX);

        let min = Money::from_centimes(i64::MIN);
        assert_eq!((min + Money::from_centimes(-1)).centimes(), i64::MIN);
    }
}
