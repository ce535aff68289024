//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Reporting configuration.
    pub reporting: ReportingConfig,
    /// Posting configuration.
    pub posting: PostingConfig,
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Currency code used in generated statements (ISO 4217).
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Decimal places for rounded amounts.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_currency() -> String {
    "BRL".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

/// Posting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PostingConfig {
    /// Tolerance used when comparing debit and credit totals.
    #[serde(default = "default_balance_tolerance")]
    pub balance_tolerance: Decimal,
}

fn default_balance_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reporting: ReportingConfig {
                currency: default_currency(),
                decimal_places: default_decimal_places(),
            },
            posting: PostingConfig {
                balance_tolerance: default_balance_tolerance(),
            },
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RAZONETE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
