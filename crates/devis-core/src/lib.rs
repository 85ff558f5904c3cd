//! # devis-core: Pure Quote Logic
//!
//! Everything a quote needs that can be computed without touching the outside
//! world: line totals, pre-tax / tax / tax-inclusive totals, the total written
//! in French words, form validation and numbering formats.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Devis Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    devis-cli (apps/)                            │   │
//! │  │   request JSON ──► config ──► build_quote ──► JSON / summary    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ devis-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  totals   │  │  speller  │  │ validation│  │ numbering │  │   │
//! │  │   │ HT/TVA/TTC│  │ FR words  │  │   rules   │  │ DEV-001   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │                  │   │
//! │  │   │ LineItem  │  │  Money    │  │  Service  │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO CONFIG FILES • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `LineItem` and `TaxRate`
//! - [`money`] - `Money`, the two-decimal presentation type
//! - [`totals`] - the totals calculator
//! - [`speller`] - amounts in French words
//! - [`catalog`] - billable services and their template keys
//! - [`quote`] - the quote form
//! - [`validation`] - form rules
//! - [`numbering`] - reference, quote number and file name formats
//! - [`error`] - domain error types
//!
//! ## Design Principles
//!
//! 1. **Exact arithmetic**: quantities and prices are `Decimal`, never floats
//! 2. **Round at the edge**: totals keep full precision; `Money` rounds half away from zero
//! 3. **Total functions**: the calculator never fails; blank cells count as zero
//! 4. **Typed errors**: the speller refuses with an error, never a sentinel string
//!
//! ## Example Usage
//!
//! ```rust
//! use devis_core::{compute_totals, spell_money, LineItem, TaxRate};
//! use rust_decimal::Decimal;
//!
//! let items = [
//!     LineItem::new(Decimal::from(1), Decimal::from(50)),
//!     LineItem::new(Decimal::from(2), Decimal::from(2500)),
//! ];
//! let totals = compute_totals(&items, TaxRate::standard());
//!
//! assert_eq!(totals.pre_tax_money().to_string(), "5050.00");
//! assert_eq!(totals.total_money().to_string(), "6060.00");
//! assert_eq!(spell_money(totals.total_money()).unwrap(), "SIX MILLE SOIXANTE");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod numbering;
pub mod quote;
pub mod speller;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Service;
pub use error::{CoreError, CoreResult, SpellError, ValidationError};
pub use money::Money;
pub use quote::{OutputFormat, QuoteForm, QuoteLine};
pub use speller::{spell, spell_money, AmountSpeller};
pub use totals::{compute_totals, TotalsResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Moroccan standard VAT (TVA) in basis points: 20%.
pub const STANDARD_TVA_BPS: u32 = 2000;

/// Maximum number of lines on one quote.
pub const MAX_QUOTE_LINES: usize = 100;
