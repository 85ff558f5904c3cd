//! Plain-text recap of a quote, printed by `--summary`.
//!
//! ```text
//! Devis DEV-001 - Réf. CAM-2025-001 - 15/06/2025
//!
//! Consultation administrative
//!   CC     Certificat de copropriété         1 × 50.00       50.00 DH
//! Évaluation immobilière
//!   LOCAL  Évaluation immobilière            1 × 2500.00   2,500.00 DH
//!
//!   Montant HT                                             2,550.00 DH
//!   TVA (20%)                                                510.00 DH
//!   Montant TTC                                            3,060.00 DH
//!
//!   Arrêté le présent devis à la somme de : TROIS MILLE SOIXANTE DH
//! ```

use devis_core::Money;
use std::fmt::Write;

use crate::document::QuoteDocument;

const LABEL_WIDTH: usize = 32;
const AMOUNT_WIDTH: usize = 16;

/// Renders the recap shown under the form before generating documents.
pub fn render_summary(document: &QuoteDocument) -> String {
    let currency = document.currency.as_str();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Devis {} - Réf. {} - {}",
        document.quote_number,
        document.reference,
        document.date.format("%d/%m/%Y")
    );
    if !document.objet.is_empty() {
        let _ = writeln!(out, "Objet : {}", document.objet);
    }
    out.push('\n');

    let used = document
        .lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.used);
    let mut section = "";
    for (index, line) in used {
        if line.section != section {
            section = line.section;
            let _ = writeln!(out, "{}", section);
        }
        let quantity = line.quantity.map(|q| q.normalize().to_string()).unwrap_or_default();
        let unit_price = line
            .unit_price
            .map(|p| Money::from_decimal(p).to_string())
            .unwrap_or_default();
        let line_total = document.totals.line_money(index).unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<6} {:<width$} {} × {:<10} {:>amount$}",
            line.code,
            line.label,
            quantity,
            unit_price,
            line_total.format_with_currency(currency),
            width = LABEL_WIDTH,
            amount = AMOUNT_WIDTH + currency.len() + 1,
        );
    }
    out.push('\n');

    let totals = [
        ("Montant HT".to_string(), document.totals.pre_tax_money()),
        (format!("TVA ({})", document.tax_rate), document.totals.tax_money()),
        ("Montant TTC".to_string(), document.totals.total_money()),
    ];
    for (label, amount) in totals {
        let _ = writeln!(
            out,
            "  {:<width$} {:>amount_width$}",
            label,
            amount.format_with_currency(currency),
            width = LABEL_WIDTH + 22,
            amount_width = AMOUNT_WIDTH + currency.len() + 1,
        );
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "  Arrêté le présent devis à la somme de : {} {}",
        document.amount_in_words, currency
    );
    let _ = writeln!(out, "  Délai : {}", document.deadline);
    let _ = writeln!(out, "  Paiement : {}", document.payment_terms);
    let _ = write!(out, "  Fichiers : {}", document.output_files.join(", "));

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DevisConfig;
    use crate::document::build_quote;
    use chrono::NaiveDate;

    fn document() -> QuoteDocument {
        let form = serde_json::from_value(serde_json::json!({
            "reference": "CAM-2025-001",
            "quote_number": "DEV-001",
            "date": "2025-06-15",
            "objet": "Expertise",
            "lines": [
                { "service": "cc", "quantity": 1 },
                { "service": "nr", "quantity": 0 },
                { "service": "local", "quantity": 1 }
            ]
        }))
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        build_quote(&form, &DevisConfig::default(), today).unwrap()
    }

    #[test]
    fn test_summary_lists_used_lines_and_totals() {
        let text = render_summary(&document());

        assert!(text.starts_with("Devis DEV-001 - Réf. CAM-2025-001 - 15/06/2025"));
        assert!(text.contains("Objet : Expertise"));
        assert!(text.contains("Consultation administrative\n  CC"));
        assert!(text.contains("Évaluation immobilière\n  LOCAL"));
        assert!(text.contains("Certificat de copropriété"));
        assert!(text.contains("2,500.00"));
        assert!(!text.contains("Note de renseignements"));
        assert!(text.contains("TVA (20%)"));
        assert!(text.contains("3,060.00 DH"));
        assert!(text.contains("TROIS MILLE SOIXANTE DH"));
        assert!(text.contains("Délai : 10 jours ouvrables"));
        assert!(text.ends_with("Devis_DEV-001_20250615.pdf"));
    }
}
