//! # Numbering & File Names
//!
//! Formats for dossier references, quote numbers and generated document
//! names. Dates are passed in; nothing here reads the clock.

use chrono::{Datelike, NaiveDate};

/// Default prefix of dossier references (`CAM-2025-001`).
pub const DEFAULT_REFERENCE_PREFIX: &str = "CAM";

/// Default prefix of quote numbers (`DEV-001`).
pub const DEFAULT_QUOTE_PREFIX: &str = "DEV";

/// Characters that can't appear in a file name on common file systems.
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// `{prefix}-{year}-{n:03}`.
///
/// ## Example
/// ```rust
/// use devis_core::numbering::format_reference;
///
/// assert_eq!(format_reference("CAM", 2025, 1), "CAM-2025-001");
/// assert_eq!(format_reference("CAM", 2025, 1234), "CAM-2025-1234");
/// ```
pub fn format_reference(prefix: &str, year: i32, number: u32) -> String {
    format!("{}-{}-{:03}", prefix, year, number)
}

/// `{prefix}-{n:03}`.
pub fn format_quote_number(prefix: &str, number: u32) -> String {
    format!("{}-{:03}", prefix, number)
}

/// `{prefix}-{YYYYMMDD}-001`: the first quote number of a given day.
pub fn dated_quote_number(prefix: &str, date: NaiveDate) -> String {
    format!(
        "{}-{:04}{:02}{:02}-001",
        prefix,
        date.year(),
        date.month(),
        date.day()
    )
}

/// Makes a string safe to use as a file name.
///
/// - `< > : " / \ | ? *` become `_`
/// - runs of whitespace become a single `_` (after trimming)
/// - runs of dots collapse to one `.`
///
/// ## Example
/// ```rust
/// use devis_core::numbering::clean_filename;
///
/// assert_eq!(clean_filename(" Devis DEV/001..docx "), "Devis_DEV_001.docx");
/// ```
pub fn clean_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if INVALID_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let spaced = replaced.split_whitespace().collect::<Vec<_>>().join("_");

    let mut cleaned = String::with_capacity(spaced.len());
    for c in spaced.chars() {
        if c == '.' && cleaned.ends_with('.') {
            continue;
        }
        cleaned.push(c);
    }
    cleaned
}

/// `Devis_{quote_number}_{YYYYMMDD}.{extension}`, cleaned.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use devis_core::numbering::document_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// assert_eq!(
///     document_file_name("DEV-001", date, "pdf"),
///     "Devis_DEV-001_20250615.pdf"
/// );
/// ```
pub fn document_file_name(quote_number: &str, date: NaiveDate, extension: &str) -> String {
    clean_filename(&format!(
        "Devis_{}_{}.{}",
        quote_number,
        date.format("%Y%m%d"),
        extension
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
