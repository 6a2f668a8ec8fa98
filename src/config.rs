use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub apify: ApifyConfig,
    pub pricing: PricingConfig,
    pub display: DisplayConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApifyConfig {
    pub base_url: String,
    pub token: Option<String>,
    /// Upper bound on one actor run, in seconds. Expiry counts as a failed
    /// fetch for that platform only.
    pub run_timeout_secs: u64,
    pub max_items_per_source: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Applied to bare (unmarked) amounts, which are assumed to be CNY.
    pub cny_to_usd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub max_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_dir: String,
}

impl AppConfig {
    pub fn from_env() -> crate::Result<Self> {
        let s = Config::builder()
            // Built-in defaults so the CLI runs without any config files
            .set_default("apify.base_url", "https://api.apify.com")?
            .set_default("apify.run_timeout_secs", 120_i64)?
            .set_default("apify.max_items_per_source", 50_i64)?
            .set_default("pricing.cny_to_usd", 0.14_f64)?
            .set_default("display.max_rows", 30_i64)?
            .set_default("export.output_dir", ".")?
            // Optional config files for overrides
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix "SCOUT_"
            .add_source(Environment::with_prefix("SCOUT").separator("__"))
            .build()?;

        let mut config: AppConfig = s.try_deserialize()?;

        // The conventional Apify variable wins when no override is set
        if config.apify.token.is_none() {
            config.apify.token = env::var("APIFY_TOKEN").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if Url::parse(&self.apify.base_url).is_err() {
            return Err(ConfigError::Message("Invalid Apify base URL format".into()));
        }

        if self.apify.run_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "Apify run_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.apify.max_items_per_source == 0 {
            return Err(ConfigError::Message(
                "Apify max_items_per_source must be greater than 0".into(),
            ));
        }

        let rate = self.pricing.conversion_rate()?;
        if rate <= Decimal::ZERO {
            return Err(ConfigError::Message(
                "Pricing cny_to_usd must be greater than 0".into(),
            ));
        }

        if self.display.max_rows == 0 {
            return Err(ConfigError::Message(
                "Display max_rows must be greater than 0".into(),
            ));
        }

        if self.export.output_dir.is_empty() {
            return Err(ConfigError::Message(
                "Export output_dir must not be empty".into(),
            ));
        }

        Ok(())
    }
}

impl ApifyConfig {
    /// The token is a hard precondition; callers check it before any
    /// aggregation starts.
    pub fn require_token(&self) -> crate::Result<&str> {
        self.token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(AppError::MissingToken)
    }
}

impl PricingConfig {
    pub fn conversion_rate(&self) -> Result<Decimal, ConfigError> {
        if !self.cny_to_usd.is_finite() {
            return Err(ConfigError::Message(
                "Pricing cny_to_usd must be a finite number".into(),
            ));
        }
        Decimal::try_from(self.cny_to_usd)
            .map_err(|e| ConfigError::Message(format!("Invalid cny_to_usd rate: {}", e)))
    }
}
