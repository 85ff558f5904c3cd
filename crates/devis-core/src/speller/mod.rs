//! # Amount Speller
//!
//! Writes a non-negative integer in words, the way the amount appears under
//! the total of a quote: `3270` → `TROIS MILLE DEUX CENT SOIXANTE-DIX`.
//!
//! ## Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  n = 91 270                                                             │
//! │                                                                         │
//! │  thousands = 91 ──► segment(91) ──► "QUATRE-VINGT-ONZE" + " MILLE"     │
//! │  remainder = 270 ─► segment(270)                                        │
//! │                       ├─ hundreds digit 2 ──► "DEUX CENT"               │
//! │                       └─ 70 ──► teen zone 70..=79, base 60              │
//! │                                 "SOIXANTE" + "-" + teens[0] "DIX"       │
//! │                                                                         │
//! │  ──► "QUATRE-VINGT-ONZE MILLE DEUX CENT SOIXANTE-DIX"                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Segment rules for 0..=99:
//! - 0..=9 and 10..=19 come straight from the `units` and `teens` tables
//! - a value inside a [`TeenZone`] is its base's tens word + a teen word
//! - anything else is a tens word, hyphen, unit word (or the `exact_tens`
//!   override when the unit is zero)
//!
//! Only [`Lexicon`] values know any words, so another language is a new table.

mod lexicon;

pub use lexicon::{Lexicon, TeenZone, FRENCH, QUATRE_VINGT_DIX_ZONE, SOIXANTE_DIX_ZONE};

use crate::error::SpellError;
use crate::money::Money;

/// Largest amount the speller writes. Millions are not supported.
pub const MAX_SPELLABLE: u64 = 999_999;

/// Spells amounts with one lexicon.
///
/// ## Example
/// ```rust
/// use devis_core::speller::AmountSpeller;
///
/// let speller = AmountSpeller::french();
/// assert_eq!(speller.spell(1500).unwrap(), "MILLE CINQ CENT");
/// assert!(speller.spell(1_000_000).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AmountSpeller<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> AmountSpeller<'a> {
    /// Creates a speller over any lexicon.
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        AmountSpeller { lexicon }
    }

    /// Writes `n` in words.
    ///
    /// Fails with [`SpellError::OutOfRange`] above [`MAX_SPELLABLE`].
    pub fn spell(&self, n: u64) -> Result<String, SpellError> {
        if n > MAX_SPELLABLE {
            return Err(SpellError::OutOfRange {
                value: n,
                max: MAX_SPELLABLE,
            });
        }
        if n == 0 {
            return Ok(self.lexicon.zero.to_string());
        }

        // n <= 999_999 so both halves fit in u32
        let thousands = (n / 1000) as u32;
        let remainder = (n % 1000) as u32;

        let mut words: Vec<String> = Vec::with_capacity(2);
        match thousands {
            0 => {}
            1 if self.lexicon.bare_single_thousand => {
                words.push(self.lexicon.thousand.to_string());
            }
            _ => words.push(format!(
                "{} {}",
                self.segment(thousands),
                self.lexicon.thousand
            )),
        }
        if remainder > 0 {
            words.push(self.segment(remainder));
        }

        Ok(words.join(" ").trim().to_string())
    }

    /// Writes the whole units of a display amount in words.
    ///
    /// Centimes are dropped (3270.99 → 3270). Negative amounts fail with
    /// [`SpellError::Negative`].
    pub fn spell_money(&self, amount: Money) -> Result<String, SpellError> {
        if amount.is_negative() {
            return Err(SpellError::Negative { amount });
        }
        self.spell(amount.whole_units().unsigned_abs())
    }

    /// 1..=999.
    fn segment(&self, n: u32) -> String {
        let lex = self.lexicon;
        let hundreds = n / 100;
        let rest = n % 100;

        let mut words: Vec<String> = Vec::with_capacity(3);
        match hundreds {
            0 => {}
            1 if lex.bare_single_hundred => words.push(lex.hundred.to_string()),
            h => {
                words.push(lex.units[h as usize].to_string());
                words.push(lex.hundred.to_string());
            }
        }
        if rest > 0 {
            words.push(self.below_hundred(rest));
        }
        words.join(" ")
    }

    /// 1..=99.
    fn below_hundred(&self, n: u32) -> String {
        let lex = self.lexicon;

        if n < 10 {
            return lex.units[n as usize].to_string();
        }
        if n < 20 {
            return lex.teens[(n - 10) as usize].to_string();
        }
        if let Some(zone) = lex.teen_zones.iter().find(|zone| zone.contains(n)) {
            let base_word = lex.tens[(zone.base / 10) as usize];
            let teen_word = lex.teens[(n - zone.base - 10) as usize];
            return format!("{}{}{}", base_word, lex.hyphen, teen_word);
        }

        let tens = (n / 10) as usize;
        let units = (n % 10) as usize;
        if units == 0 {
            return lex.exact_tens[tens].unwrap_or(lex.tens[tens]).to_string();
        }
        format!("{}{}{}", lex.tens[tens], lex.hyphen, lex.units[units])
    }
}

impl AmountSpeller<'static> {
    /// Speller over the [`FRENCH`] lexicon.
    pub fn french() -> Self {
        AmountSpeller::new(&FRENCH)
    }
}

impl Default for AmountSpeller<'static> {
    fn default() -> Self {
        AmountSpeller::french()
    }
}

/// Writes `n` in French words.
///
/// ## Example
/// ```rust
/// use devis_core::spell;
///
/// assert_eq!(spell(0).unwrap(), "ZÉRO");
/// assert_eq!(spell(80).unwrap(), "QUATRE-VINGTS");
/// assert_eq!(spell(91).unwrap(), "QUATRE-VINGT-ONZE");
/// assert_eq!(spell(2000).unwrap(), "DEUX MILLE");
/// ```
pub fn spell(n: u64) -> Result<String, SpellError> {
    AmountSpeller::french().spell(n)
}

/// Writes `n` in words using `lexicon`.
pub fn spell_with(lexicon: &Lexicon, n: u64) -> Result<String, SpellError> {
    AmountSpeller::new(lexicon).spell(n)
}

/// Writes the whole units of `amount` in French words.
pub fn spell_money(amount: Money) -> Result<String, SpellError> {
    AmountSpeller::french().spell_money(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH_TEEN_ZONES: [TeenZone; 0] = [];

    /// A second table, to show the control flow carries no French.
    const ENGLISH: Lexicon = Lexicon {
        zero: "ZERO",
        units: [
            "", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
        ],
        teens: [
            "TEN", "ELEVEN", "TWELVE", "THIRTEEN", "FOURTEEN", "FIFTEEN", "SIXTEEN",
            "SEVENTEEN", "EIGHTEEN", "NINETEEN",
        ],
        tens: [
            "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
        ],
        exact_tens: [None; 10],
        teen_zones: &ENGLISH_TEEN_ZONES,
        hyphen: "-",
        hundred: "HUNDRED",
        thousand: "THOUSAND",
        bare_single_hundred: false,
        bare_single_thousand: false,
    };

    #[test]
    fn test_zero() {
        assert_eq!(spell(0).unwrap(), "ZÉRO");
    }

    #[test]
    fn test_units_and_teens() {
        assert_eq!(spell(1).unwrap(), "UN");
        assert_eq!(spell(9).unwrap(), "NEUF");
        assert_eq!(spell(10).unwrap(), "DIX");
        assert_eq!(spell(15).unwrap(), "QUINZE");
        assert_eq!(spell(16).unwrap(), "SEIZE");
        assert_eq!(spell(17).unwrap(), "DIX-SEPT");
        assert_eq!(spell(19).unwrap(), "DIX-NEUF");
    }

    #[test]
    fn test_regular_tens() {
        assert_eq!(spell(20).unwrap(), "VINGT");
        assert_eq!(spell(21).unwrap(), "VINGT-UN");
        assert_eq!(spell(45).unwrap(), "QUARANTE-CINQ");
        assert_eq!(spell(60).unwrap(), "SOIXANTE");
        assert_eq!(spell(69).unwrap(), "SOIXANTE-NEUF");
    }

    #[test]
    fn test_soixante_dix_zone() {
        assert_eq!(spell(70).unwrap(), "SOIXANTE-DIX");
        assert_eq!(spell(71).unwrap(), "SOIXANTE-ONZE");
        assert_eq!(spell(77).unwrap(), "SOIXANTE-DIX-SEPT");
        assert_eq!(spell(79).unwrap(), "SOIXANTE-DIX-NEUF");
    }

    #[test]
    fn test_quatre_vingt_zones() {
        assert_eq!(spell(80).unwrap(), "QUATRE-VINGTS");
        assert_eq!(spell(81).unwrap(), "QUATRE-VINGT-UN");
        assert_eq!(spell(89).unwrap(), "QUATRE-VINGT-NEUF");
        assert_eq!(spell(90).unwrap(), "QUATRE-VINGT-DIX");
        assert_eq!(spell(91).unwrap(), "QUATRE-VINGT-ONZE");
        assert_eq!(spell(99).unwrap(), "QUATRE-VINGT-DIX-NEUF");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(spell(100).unwrap(), "CENT");
        assert_eq!(spell(101).unwrap(), "CENT UN");
        assert_eq!(spell(200).unwrap(), "DEUX CENT");
        assert_eq!(spell(380).unwrap(), "TROIS CENT QUATRE-VINGTS");
        assert_eq!(spell(999).unwrap(), "NEUF CENT QUATRE-VINGT-DIX-NEUF");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(spell(1000).unwrap(), "MILLE");
        assert_eq!(spell(1001).unwrap(), "MILLE UN");
        assert_eq!(spell(2000).unwrap(), "DEUX MILLE");
        assert_eq!(spell(100_000).unwrap(), "CENT MILLE");
        assert_eq!(spell(80_000).unwrap(), "QUATRE-VINGTS MILLE");
    }

    #[test]
    fn test_reference_table() {
        let table: [(u64, &str); 8] = [
            (100, "CENT"),
            (1500, "MILLE CINQ CENT"),
            (3270, "TROIS MILLE DEUX CENT SOIXANTE-DIX"),
            (3060, "TROIS MILLE SOIXANTE"),
            (91_270, "QUATRE-VINGT-ONZE MILLE DEUX CENT SOIXANTE-DIX"),
            (99_999, "QUATRE-VINGT-DIX-NEUF MILLE NEUF CENT QUATRE-VINGT-DIX-NEUF"),
            (171_171, "CENT SOIXANTE-ONZE MILLE CENT SOIXANTE-ONZE"),
            (
                999_999,
                "NEUF CENT QUATRE-VINGT-DIX-NEUF MILLE NEUF CENT QUATRE-VINGT-DIX-NEUF",
            ),
        ];
        for (n, expected) in table {
            assert_eq!(spell(n).unwrap(), expected, "spelling {}", n);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            spell(1_000_000),
            Err(SpellError::OutOfRange {
                value: 1_000_000,
                max: MAX_SPELLABLE
            })
        );
        assert!(spell(u64::MAX).is_err());
    }

    #[test]
    fn test_no_double_or_trailing_spaces() {
        for n in [1, 20, 100, 1000, 1100, 10_000, 100_100, 200_000] {
            let words = spell(n).unwrap();
            assert!(!words.contains("  "), "{} -> {:?}", n, words);
            assert_eq!(words.trim(), words);
        }
    }

    #[test]
    fn test_spell_money() {
        assert_eq!(
            spell_money(Money::from_centimes(327_099)).unwrap(),
            "TROIS MILLE DEUX CENT SOIXANTE-DIX"
        );
        assert_eq!(spell_money(Money::from_centimes(99)).unwrap(), "ZÉRO");
        assert!(matches!(
            spell_money(Money::from_centimes(-50)),
            Err(SpellError::Negative { .. })
        ));
    }

    #[test]
    fn test_other_lexicon() {
        assert_eq!(spell_with(&ENGLISH, 0).unwrap(), "ZERO");
        assert_eq!(spell_with(&ENGLISH, 15).unwrap(), "FIFTEEN");
        assert_eq!(spell_with(&ENGLISH, 42).unwrap(), "FORTY-TWO");
        assert_eq!(spell_with(&ENGLISH, 80).unwrap(), "EIGHTY");
        assert_eq!(
            spell_with(&ENGLISH, 1500).unwrap(),
            "ONE THOUSAND FIVE HUNDRED"
        );
        assert_eq!(
            spell_with(&ENGLISH, 999_999).unwrap(),
            "NINE HUNDRED NINETY-NINE THOUSAND NINE HUNDRED NINETY-NINE"
        );
    }

    #[test]
    fn test_zone_constants() {
        assert!(SOIXANTE_DIX_ZONE.contains(70));
        assert!(SOIXANTE_DIX_ZONE.contains(79));
        assert!(!SOIXANTE_DIX_ZONE.contains(80));
        assert!(QUATRE_VINGT_DIX_ZONE.contains(90));
        assert!(!QUATRE_VINGT_DIX_ZONE.contains(89));
    }
}
