//! # Devis Configuration
//!
//! Company details, TVA rate, default service prices and numbering prefixes.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DEVIS_TAX_RATE=20        (percentage)                              │
//! │     DEVIS_CURRENCY=MAD                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/devis/devis.toml (Linux)                                 │
//! │     ~/Library/Application Support/ma.cam.devis/devis.toml (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     20% TVA, DH, catalogue prices                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [company]
//! currency = "DH"
//! deadline = "10 jours ouvrables"
//! payment_terms = "100% à la livraison"
//!
//! [tax]
//! rate = "0.20"
//!
//! [prices]
//! cc = "50"
//! local = "2500"
//!
//! [numbering]
//! reference_prefix = "CAM"
//! quote_prefix = "DEV"
//! ```

use devis_core::numbering::{DEFAULT_QUOTE_PREFIX, DEFAULT_REFERENCE_PREFIX};
use devis_core::validation::validate_tax_rate;
use devis_core::{Service, TaxRate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "devis.toml";

// =============================================================================
// Config Error
// =============================================================================

/// Errors while loading or checking the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`DevisConfig`].
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Tax rate is not a fraction in [0, 1].
    #[error("Tax rate {0} is outside 0..=1")]
    InvalidTaxRate(Decimal),

    /// A configured unit price is negative.
    #[error("Price for {service} must not be negative (got {price})")]
    NegativePrice { service: Service, price: Decimal },

    /// A numbering prefix is empty.
    #[error("{0} must not be empty")]
    EmptyPrefix(&'static str),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Company Settings
// =============================================================================

/// Fixed wording printed on every quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    /// Currency label printed after amounts.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Delivery deadline ("Délai").
    #[serde(default = "default_deadline")]
    pub deadline: String,

    /// Payment terms ("Modalités de paiement").
    #[serde(default = "default_payment_terms")]
    pub payment_terms: String,
}

fn default_currency() -> String {
    "DH".to_string()
}

fn default_deadline() -> String {
    "10 jours ouvrables".to_string()
}

fn default_payment_terms() -> String {
    "100% à la livraison".to_string()
}

impl Default for CompanySettings {
    fn default() -> Self {
        CompanySettings {
            currency: default_currency(),
            deadline: default_deadline(),
            payment_terms: default_payment_terms(),
        }
    }
}

// =============================================================================
// Tax Settings
// =============================================================================

/// TVA applied to quotes that don't carry their own rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxSettings {
    /// Fraction, e.g. `"0.20"`.
    #[serde(default)]
    pub rate: TaxRate,
}

// =============================================================================
// Price Settings
// =============================================================================

/// Default unit price per service, pre-filled on each form line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSettings {
    #[serde(default = "default_cc")]
    pub cc: Decimal,
    #[serde(default = "default_pc")]
    pub pc: Decimal,
    #[serde(default = "default_tc")]
    pub tc: Decimal,
    #[serde(default = "default_nr")]
    pub nr: Decimal,
    #[serde(default = "default_local")]
    pub local: Decimal,
}

fn default_cc() -> Decimal {
    Service::CoOwnershipCertificate.default_unit_price()
}
fn default_pc() -> Decimal {
    Service::CoOwnershipPlan.default_unit_price()
}
fn default_tc() -> Decimal {
    Service::AreaSchedule.default_unit_price()
}
fn default_nr() -> Decimal {
    Service::InformationNote.default_unit_price()
}
fn default_local() -> Decimal {
    Service::PropertyValuation.default_unit_price()
}

impl Default for PriceSettings {
    fn default() -> Self {
        PriceSettings {
            cc: default_cc(),
            pc: default_pc(),
            tc: default_tc(),
            nr: default_nr(),
            local: default_local(),
        }
    }
}

impl PriceSettings {
    /// Configured unit price of `service`.
    pub fn price_for(&self, service: Service) -> Decimal {
        match service {
            Service::CoOwnershipCertificate => self.cc,
            Service::CoOwnershipPlan => self.pc,
            Service::AreaSchedule => self.tc,
            Service::InformationNote => self.nr,
            Service::PropertyValuation => self.local,
        }
    }
}

// =============================================================================
// Numbering Settings
// =============================================================================

/// Prefixes for references and quote numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingSettings {
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,

    #[serde(default = "default_quote_prefix")]
    pub quote_prefix: String,
}

fn default_reference_prefix() -> String {
    DEFAULT_REFERENCE_PREFIX.to_string()
}

fn default_quote_prefix() -> String {
    DEFAULT_QUOTE_PREFIX.to_string()
}

impl Default for NumberingSettings {
    fn default() -> Self {
        NumberingSettings {
            reference_prefix: default_reference_prefix(),
            quote_prefix: default_quote_prefix(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevisConfig {
    #[serde(default)]
    pub company: CompanySettings,

    #[serde(default)]
    pub tax: TaxSettings,

    #[serde(default)]
    pub prices: PriceSettings,

    #[serde(default)]
    pub numbering: NumberingSettings,
}

impl DevisConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: an explicit path must exist, the platform
    ///    default (`devis.toml`) is optional
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                info!(?path, "Loading devis config from file");
                config = Self::from_file(&path)?;
            }
            None => {
                if let Some(path) = Self::default_config_path() {
                    if path.exists() {
                        info!(?path, "Loading devis config from file");
                        config = Self::from_file(&path)?;
                    } else {
                        debug!(?path, "Config file not found, using defaults");
                    }
                }
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses one TOML file, without environment overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks every value that serde can't.
    pub fn validate(&self) -> ConfigResult<()> {
        let rate = self.tax.rate.fraction();
        if validate_tax_rate(rate).is_err() {
            return Err(ConfigError::InvalidTaxRate(rate));
        }

        for service in Service::ALL {
            let price = self.prices.price_for(service);
            if price < Decimal::ZERO {
                return Err(ConfigError::NegativePrice { service, price });
            }
        }

        if self.numbering.reference_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyPrefix("numbering.reference_prefix"));
        }
        if self.numbering.quote_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyPrefix("numbering.quote_prefix"));
        }

        Ok(())
    }

    /// Applies `DEVIS_*` overrides read through `lookup`.
    ///
    /// `DEVIS_TAX_RATE` is a percentage (`20` or `20.0`). Unparseable values
    /// are logged and ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("DEVIS_TAX_RATE") {
            match Decimal::from_str(raw.trim()).map(TaxRate::from_percentage) {
                Ok(Ok(rate)) => {
                    debug!(rate = %rate, "Overriding tax rate from environment");
                    self.tax.rate = rate;
                }
                _ => warn!(value = %raw, "Ignoring invalid DEVIS_TAX_RATE"),
            }
        }

        if let Some(currency) = lookup("DEVIS_CURRENCY") {
            debug!(currency = %currency, "Overriding currency from environment");
            self.company.currency = currency;
        }
    }

    /// `devis.toml` in the platform config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("ma", "cam", "devis")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Tax rate for a quote: its own override, else the configured one.
    pub fn effective_tax_rate(&self, requested: Option<TaxRate>) -> TaxRate {
        requested.unwrap_or(self.tax.rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DevisConfig::default();
        assert_eq!(config.company.currency, "DH");
        assert_eq!(config.tax.rate, TaxRate::standard());
        assert_eq!(config.prices.price_for(Service::PropertyValuation), dec!(2500));
        assert_eq!(config.numbering.quote_prefix, "DEV");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: DevisConfig = toml::from_str(
            r#"
            [tax]
            rate = "0.10"

            [prices]
            local = "3000"
            "#,
        )
        .unwrap();

        assert_eq!(config.tax.rate, TaxRate::from_bps(1000));
        assert_eq!(config.prices.local, dec!(3000));
        assert_eq!(config.prices.cc, dec!(50));
        assert_eq!(config.company.deadline, "10 jours ouvrables");
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = DevisConfig::default();
        config.company.currency = "MAD".to_string();
        config.prices.nr = dec!(45.50);

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: DevisConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = DevisConfig::default();
        config.tax.rate = TaxRate::from_bps(15_000);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTaxRate(_))));

        let mut config = DevisConfig::default();
        config.prices.tc = dec!(-1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativePrice {
                service: Service::AreaSchedule,
                ..
            })
        ));

        let mut config = DevisConfig::default();
        config.numbering.quote_prefix = " ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyPrefix(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DevisConfig::default();
        config.apply_env_overrides(env(&[("DEVIS_TAX_RATE", "14"), ("DEVIS_CURRENCY", "MAD")]));
        assert_eq!(config.tax.rate, TaxRate::from_bps(1400));
        assert_eq!(config.company.currency, "MAD");
    }

    #[test]
    fn test_invalid_env_tax_rate_is_ignored() {
        let mut config = DevisConfig::default();
        config.apply_env_overrides(env(&[("DEVIS_TAX_RATE", "twenty")]));
        assert_eq!(config.tax.rate, TaxRate::standard());

        config.apply_env_overrides(env(&[("DEVIS_TAX_RATE", "250")]));
        assert_eq!(config.tax.rate, TaxRate::standard());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = DevisConfig::from_file(Path::new("/nonexistent/devis.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_with_missing_explicit_path_fails() {
        let path = PathBuf::from("/nonexistent/typo-devis.toml");
        let err = DevisConfig::load(Some(path.clone())).unwrap_err();
        match err {
            ConfigError::Read { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_effective_tax_rate() {
        let config = DevisConfig::default();
        assert_eq!(config.effective_tax_rate(None), TaxRate::standard());
        assert_eq!(
            config.effective_tax_rate(Some(TaxRate::zero())),
            TaxRate::zero()
        );
    }
}
