//! # Quote Form
//!
//! What the quote form collects: header fields, one line per billed service,
//! the number of report copies and the requested output format.
//!
//! ## Example JSON
//! ```json
//! {
//!   "reference": "CAM-2025-001",
//!   "quote_number": "DEV-001",
//!   "date": "2025-06-15",
//!   "objet": "Expertise immobilière",
//!   "gerant": "M. Alami",
//!   "lines": [
//!     { "service": "cc", "quantity": 1, "unit_price": 50 },
//!     { "service": "local", "quantity": 2 }
//!   ],
//!   "report_count": 1,
//!   "output_format": "both"
//! }
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Service;
use crate::types::{LineItem, TaxRate};

/// Which documents to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OutputFormat {
    /// PDF only (converted from the Word document).
    #[default]
    Pdf,
    /// Word document only.
    Docx,
    /// Word and PDF.
    Both,
}

impl OutputFormat {
    /// File extensions to produce, Word first.
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            OutputFormat::Pdf => &["pdf"],
            OutputFormat::Docx => &["docx"],
            OutputFormat::Both => &["docx", "pdf"],
        }
    }

    /// Whether an external Word → PDF conversion is needed.
    pub const fn needs_pdf_conversion(&self) -> bool {
        matches!(self, OutputFormat::Pdf | OutputFormat::Both)
    }
}

/// One service line as entered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteLine {
    pub service: Service,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub quantity: Option<Decimal>,

    /// Absent means "use the configured price for this service".
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub unit_price: Option<Decimal>,
}

impl QuoteLine {
    /// Line item for the calculator, with `fallback_price` standing in for a
    /// missing unit price.
    pub fn to_line_item(&self, fallback_price: Option<Decimal>) -> LineItem {
        LineItem {
            quantity: self.quantity,
            unit_price: self.unit_price.or(fallback_price),
        }
    }

    /// True when the quantity is absent or zero.
    pub fn is_unused(&self) -> bool {
        self.quantity.map_or(true, |q| q.is_zero())
    }
}

/// The whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteForm {
    /// Dossier reference, e.g. `CAM-2025-001`.
    #[serde(default)]
    pub reference: String,

    /// Quote number, e.g. `DEV-001`.
    #[serde(default)]
    pub quote_number: String,

    /// Issue date. The caller fills in today when absent.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,

    /// Purpose of the quote ("Objet").
    #[serde(default, alias = "objectif")]
    pub objet: String,

    /// Manager name.
    #[serde(default)]
    pub gerant: String,

    #[serde(default)]
    pub client_email: Option<String>,

    #[serde(default)]
    pub client_phone: Option<String>,

    #[serde(default)]
    pub lines: Vec<QuoteLine>,

    /// Number of report copies delivered.
    #[serde(default = "default_report_count")]
    pub report_count: i64,

    #[serde(default)]
    pub output_format: OutputFormat,

    /// Overrides the configured TVA rate for this quote only.
    #[serde(default)]
    pub tax_rate: Option<TaxRate>,
}

fn default_report_count() -> i64 {
    1
}

// =============================================================================
// Unit Tests
// =============================================================================
