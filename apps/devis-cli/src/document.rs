//! # Quote Document
//!
//! Turns a quote request into everything the document renderer needs: the
//! totals, the total in words, the template placeholder map and the names of
//! the files to produce.
//!
//! ## Build Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  QuoteForm ──► fill blank reference / quote number (config prefixes)   │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │              validate_quote_form ──► errors? ──► AppError              │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  lines + configured prices ──► compute_totals ──► TotalsResult         │
//! │                                                        │                │
//! │                                 total_money() ──► spell_money          │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                     placeholders, output file names ──► QuoteDocument  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate};
use devis_core::numbering::{dated_quote_number, document_file_name, format_reference};
use devis_core::validation::validate_quote_form;
use devis_core::{
    compute_totals, spell_money, LineItem, Money, OutputFormat, QuoteForm, QuoteLine, Service,
    TaxRate, TotalsResult,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::DevisConfig;
use crate::error::AppError;

/// Template key for the dossier reference.
pub const KEY_REFERENCE: &str = "{REFERENCE}";
/// Template key for the quote number.
pub const KEY_QUOTE_NUMBER: &str = "{DEVIS_NUMBER}";
/// Template key for the issue date (`dd/mm/YYYY`).
pub const KEY_DATE: &str = "{DATE}";
/// Template key for the purpose of the quote.
pub const KEY_OBJECT: &str = "{OBJECTIF}";
/// Template key for the manager name.
pub const KEY_MANAGER: &str = "{GERANT}";
/// Template key for the number of report copies.
pub const KEY_REPORT_COUNT: &str = "{REP}";
/// Template key for the pre-tax total.
pub const KEY_PRE_TAX: &str = "{M_HT}";
/// Template key for the tax amount.
pub const KEY_TAX: &str = "{TVA}";
/// Template key for the tax-inclusive total.
pub const KEY_TOTAL: &str = "{M_TTC}";
/// Template key for the tax-inclusive total in words.
pub const KEY_AMOUNT_IN_WORDS: &str = "{MONTANT_LETTRES}";

/// One billed line as it appears on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLine {
    pub service: Service,
    pub code: &'static str,
    pub label: &'static str,
    /// Form section heading the line is listed under.
    pub section: &'static str,
    pub quantity: Option<Decimal>,
    /// The unit price actually used (requested or configured).
    pub unit_price: Option<Decimal>,
    /// Rounded to centimes.
    pub line_total: String,
    /// False when the quantity is absent or zero; the template row stays blank.
    pub used: bool,
}

/// Totals rounded to centimes, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTotals {
    pub pre_tax: String,
    pub tax: String,
    pub total: String,
}

/// Everything needed to render one quote.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteDocument {
    pub reference: String,
    pub quote_number: String,
    pub date: NaiveDate,
    pub objet: String,
    pub gerant: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub report_count: i64,
    pub currency: String,
    pub deadline: String,
    pub payment_terms: String,
    pub tax_rate: TaxRate,
    pub lines: Vec<DocumentLine>,
    pub totals: TotalsResult,
    pub display_totals: DisplayTotals,
    /// Whole units of the tax-inclusive total, in words.
    pub amount_in_words: String,
    /// Template key → replacement text.
    pub placeholders: BTreeMap<String, String>,
    pub output_format: OutputFormat,
    /// The renderer has to convert the Word document to PDF.
    pub needs_pdf_conversion: bool,
    pub output_files: Vec<String>,
}

/// Builds the document for `form`.
///
/// `today` stands in for a missing date. A blank reference becomes
/// `{prefix}-{year}-001` and a blank quote number `{prefix}-{YYYYMMDD}-001`,
/// the values the form pre-fills.
pub fn build_quote(
    form: &QuoteForm,
    config: &DevisConfig,
    today: NaiveDate,
) -> Result<QuoteDocument, AppError> {
    let form = with_prefilled_numbers(form, config, today);

    let errors = validate_quote_form(&form);
    if !errors.is_empty() {
        return Err(AppError::from_validation(&errors));
    }

    let date = form.date.unwrap_or(today);
    let tax_rate = config.effective_tax_rate(form.tax_rate);

    let items: Vec<LineItem> = form
        .lines
        .iter()
        .map(|line| line.to_line_item(Some(config.prices.price_for(line.service))))
        .collect();
    let totals = compute_totals(&items, tax_rate);
    let amount_in_words = spell_money(totals.total_money())?;

    let lines: Vec<DocumentLine> = form
        .lines
        .iter()
        .zip(&items)
        .enumerate()
        .map(|(index, (line, item))| document_line(line, item, &totals, index))
        .collect();

    let output_files = form
        .output_format
        .extensions()
        .iter()
        .map(|ext| document_file_name(&form.quote_number, date, ext))
        .collect();

    let mut document = QuoteDocument {
        reference: form.reference.clone(),
        quote_number: form.quote_number.clone(),
        date,
        objet: form.objet.clone(),
        gerant: form.gerant.clone(),
        client_email: form.client_email.clone(),
        client_phone: form.client_phone.clone(),
        report_count: form.report_count,
        currency: config.company.currency.clone(),
        deadline: config.company.deadline.clone(),
        payment_terms: config.company.payment_terms.clone(),
        tax_rate,
        lines,
        display_totals: DisplayTotals {
            pre_tax: totals.pre_tax_money().to_string(),
            tax: totals.tax_money().to_string(),
            total: totals.total_money().to_string(),
        },
        totals,
        amount_in_words,
        placeholders: BTreeMap::new(),
        output_format: form.output_format,
        needs_pdf_conversion: form.output_format.needs_pdf_conversion(),
        output_files,
    };
    document.placeholders = build_placeholders(&document);

    info!(
        quote_number = %document.quote_number,
        total = %document.display_totals.total,
        lines = document.lines.len(),
        "Quote built"
    );

    Ok(document)
}

fn with_prefilled_numbers(form: &QuoteForm, config: &DevisConfig, today: NaiveDate) -> QuoteForm {
    let mut form = form.clone();
    let date = form.date.unwrap_or(today);
    form.reference = form.reference.trim().to_string();
    form.quote_number = form.quote_number.trim().to_string();

    if form.reference.is_empty() {
        form.reference = format_reference(&config.numbering.reference_prefix, date.year(), 1);
        debug!(reference = %form.reference, "Pre-filled reference");
    }
    if form.quote_number.is_empty() {
        form.quote_number = dated_quote_number(&config.numbering.quote_prefix, date);
        debug!(quote_number = %form.quote_number, "Pre-filled quote number");
    }

    form
}

fn document_line(
    line: &QuoteLine,
    item: &LineItem,
    totals: &TotalsResult,
    index: usize,
) -> DocumentLine {
    DocumentLine {
        service: line.service,
        code: line.service.code(),
        label: line.service.label(),
        section: line.service.section(),
        quantity: line.quantity,
        unit_price: item.unit_price,
        line_total: totals.line_money(index).unwrap_or_default().to_string(),
        used: !line.is_unused(),
    }
}

/// Template key → text for every key of the quote template.
///
/// Services missing from the request, or with a zero quantity, get empty
/// strings so their row stays blank.
pub fn build_placeholders(document: &QuoteDocument) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    map.insert(KEY_REFERENCE.to_string(), document.reference.clone());
    map.insert(KEY_QUOTE_NUMBER.to_string(), document.quote_number.clone());
    map.insert(KEY_DATE.to_string(), document.date.format("%d/%m/%Y").to_string());
    map.insert(KEY_OBJECT.to_string(), document.objet.clone());
    map.insert(KEY_MANAGER.to_string(), document.gerant.clone());

    for service in Service::ALL {
        let keys = service.placeholders();
        let used = document
            .lines
            .iter()
            .find(|line| line.service == service)
            .filter(|line| line.used);

        let (quantity, unit_price, line_total) = match used {
            Some(line) => (
                line.quantity.map(|q| q.normalize().to_string()).unwrap_or_default(),
                line.unit_price
                    .map(|p| Money::from_decimal(p).to_string())
                    .unwrap_or_default(),
                line.line_total.clone(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        map.insert(keys.quantity.to_string(), quantity);
        map.insert(keys.unit_price.to_string(), unit_price);
        map.insert(keys.line_total.to_string(), line_total);
    }

    map.insert(KEY_REPORT_COUNT.to_string(), document.report_count.to_string());
    map.insert(KEY_PRE_TAX.to_string(), document.display_totals.pre_tax.clone());
    map.insert(KEY_TAX.to_string(), document.display_totals.tax.clone());
    map.insert(KEY_TOTAL.to_string(), document.display_totals.total.clone());
    map.insert(KEY_AMOUNT_IN_WORDS.to_string(), document.amount_in_words.clone());

    map
}

// =============================================================================
// Unit Tests
// =============================================================================
