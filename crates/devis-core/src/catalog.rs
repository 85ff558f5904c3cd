//! # Service Catalogue
//!
//! The fixed list of services a CAM quote can bill, with the default unit
//! prices the form pre-fills and the template placeholders each line feeds.
//!
//! ```text
//! ┌──────────┬─────────────────────────────────┬───────────┬──────────────────────┐
//! │ Code     │ Label                           │ Default   │ Placeholders         │
//! ├──────────┼─────────────────────────────────┼───────────┼──────────────────────┤
//! │ CC       │ Certificat de copropriété       │    50 DH  │ {CC} {PU_CC} {PT_CC} │
//! │ PC       │ Plan de copropriété             │    75 DH  │ {PC} {PU_PC} {PT_PC} │
//! │ TC       │ Tableau de contenance           │    60 DH  │ {TC} {PU_TC} {PT_TC} │
//! │ NR       │ Note de renseignements          │    40 DH  │ {NR} {PU_NR} {PT_NR} │
//! │ LOCAL    │ Évaluation immobilière (local)  │  2500 DH  │ {LOCAL} {PU_L} {PT_L}│
//! └──────────┴─────────────────────────────────┴───────────┴──────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// A billable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Service {
    /// Certificat de copropriété.
    #[serde(rename = "cc")]
    CoOwnershipCertificate,
    /// Plan de copropriété.
    #[serde(rename = "pc")]
    CoOwnershipPlan,
    /// Tableau de contenance.
    #[serde(rename = "tc")]
    AreaSchedule,
    /// Note de renseignements.
    #[serde(rename = "nr")]
    InformationNote,
    /// Évaluation immobilière, billed per local.
    #[serde(rename = "local")]
    PropertyValuation,
}

/// Template keys fed by one service line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePlaceholders {
    pub quantity: &'static str,
    pub unit_price: &'static str,
    pub line_total: &'static str,
}

impl Service {
    /// Every service, in the order the form and the document list them.
    pub const ALL: [Service; 5] = [
        Service::CoOwnershipCertificate,
        Service::CoOwnershipPlan,
        Service::AreaSchedule,
        Service::InformationNote,
        Service::PropertyValuation,
    ];

    /// Short code printed on the form (`CC`, `LOCAL`, …).
    pub const fn code(&self) -> &'static str {
        match self {
            Service::CoOwnershipCertificate => "CC",
            Service::CoOwnershipPlan => "PC",
            Service::AreaSchedule => "TC",
            Service::InformationNote => "NR",
            Service::PropertyValuation => "LOCAL",
        }
    }

    /// French label as shown on the quote.
    pub const fn label(&self) -> &'static str {
        match self {
            Service::CoOwnershipCertificate => "Certificat de copropriété",
            Service::CoOwnershipPlan => "Plan de copropriété",
            Service::AreaSchedule => "Tableau de contenance",
            Service::InformationNote => "Note de renseignements",
            Service::PropertyValuation => "Évaluation immobilière",
        }
    }

    /// Form section the service belongs to.
    pub const fn section(&self) -> &'static str {
        match self {
            Service::PropertyValuation => "Évaluation immobilière",
            _ => "Consultation administrative",
        }
    }

    /// Built-in unit price in DH, used when configuration doesn't override it.
    pub fn default_unit_price(&self) -> Decimal {
        match self {
            Service::CoOwnershipCertificate => Decimal::from(50),
            Service::CoOwnershipPlan => Decimal::from(75),
            Service::AreaSchedule => Decimal::from(60),
            Service::InformationNote => Decimal::from(40),
            Service::PropertyValuation => Decimal::from(2500),
        }
    }

    /// Placeholder names in the Word template.
    pub const fn placeholders(&self) -> ServicePlaceholders {
        match self {
            Service::CoOwnershipCertificate => ServicePlaceholders {
                quantity: "{CC}",
                unit_price: "{PU_CC}",
                line_total: "{PT_CC}",
            },
            Service::CoOwnershipPlan => ServicePlaceholders {
                quantity: "{PC}",
                unit_price: "{PU_PC}",
                line_total: "{PT_PC}",
            },
            Service::AreaSchedule => ServicePlaceholders {
                quantity: "{TC}",
                unit_price: "{PU_TC}",
                line_total: "{PT_TC}",
            },
            Service::InformationNote => ServicePlaceholders {
                quantity: "{NR}",
                unit_price: "{PU_NR}",
                line_total: "{PT_NR}",
            },
            Service::PropertyValuation => ServicePlaceholders {
                quantity: "{LOCAL}",
                unit_price: "{PU_L}",
                line_total: "{PT_L}",
            },
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses a code, case-insensitively.
impl FromStr for Service {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "service".to_string(),
                reason: format!("unknown service code '{}'", s),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
