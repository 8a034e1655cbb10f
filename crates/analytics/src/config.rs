//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PULSE_SEED` - Seed for reproducible datasets (default: random per run)
//! - `PULSE_CUSTOMER_COUNT` - Number of generated customers (default: 100)
//! - `PULSE_ORDER_COUNT` - Number of generated orders (default: 100)
//! - `PULSE_REFERENCE_DATE` - "Today" for relative dates, `YYYY-MM-DD` (default: current UTC date)
//! - `PULSE_HOURLY_VALUE` - Dollar value of one saved staff hour (default: 25)

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use shop_pulse_core::Money;
use thiserror::Error;

const DEFAULT_CUSTOMER_COUNT: usize = 100;
const DEFAULT_ORDER_COUNT: usize = 100;
const DEFAULT_HOURLY_VALUE: i64 = 25;
/// Largest customer or order count a dataset may hold.
pub const MAX_RECORD_COUNT: usize = 1_000_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Invalid {0}: {1}")]
    InvalidCount(&'static str, String),
}

/// Settings for building a dashboard dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Seed for the generator RNG. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
    /// How many customers to generate.
    pub customer_count: usize,
    /// How many orders to generate.
    pub order_count: usize,
    /// The day treated as "today" by every relative date.
    pub reference_date: NaiveDate,
    /// Value of one hour saved by a utility app.
    pub hourly_value: Money,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            customer_count: DEFAULT_CUSTOMER_COUNT,
            order_count: DEFAULT_ORDER_COUNT,
            reference_date: Utc::now().date_naive(),
            hourly_value: Money::from_dollars(DEFAULT_HOURLY_VALUE),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = parse_optional(&lookup, "PULSE_SEED")?;
        let customer_count = parse_count(&lookup, "PULSE_CUSTOMER_COUNT")?
            .unwrap_or(defaults.customer_count);
        let order_count =
            parse_count(&lookup, "PULSE_ORDER_COUNT")?.unwrap_or(defaults.order_count);
        let reference_date = match lookup("PULSE_REFERENCE_DATE") {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                ConfigError::InvalidEnvVar("PULSE_REFERENCE_DATE".to_string(), e.to_string())
            })?,
            None => defaults.reference_date,
        };
        let hourly_value = match parse_optional::<i64, _>(&lookup, "PULSE_HOURLY_VALUE")? {
            Some(dollars) if dollars < 0 => {
                return Err(ConfigError::InvalidEnvVar(
                    "PULSE_HOURLY_VALUE".to_string(),
                    "must not be negative".to_string(),
                ));
            }
            Some(dollars) => Money::from_dollars(dollars),
            None => defaults.hourly_value,
        };

        Ok(Self {
            seed,
            customer_count,
            order_count,
            reference_date,
            hourly_value,
        })
    }

    /// Pin the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the reference date.
    #[must_use]
    pub const fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// Set how many customers to generate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCount` if `count` exceeds `MAX_RECORD_COUNT`.
    pub fn with_customer_count(mut self, count: usize) -> Result<Self, ConfigError> {
        self.customer_count = check_record_count(count)
            .map_err(|reason| ConfigError::InvalidCount("customer count", reason))?;
        Ok(self)
    }

    /// Set how many orders to generate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCount` if `count` exceeds `MAX_RECORD_COUNT`.
    pub fn with_order_count(mut self, count: usize) -> Result<Self, ConfigError> {
        self.order_count = check_record_count(count)
            .map_err(|reason| ConfigError::InvalidCount("order count", reason))?;
        Ok(self)
    }
}

fn check_record_count(count: usize) -> Result<usize, String> {
    if count > MAX_RECORD_COUNT {
        return Err(format!("must be at most {MAX_RECORD_COUNT}, got {count}"));
    }
    Ok(count)
}

fn parse_optional<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
        })
        .transpose()
}

fn parse_count<F>(lookup: &F, name: &str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_optional::<usize, _>(lookup, name)?
        .map(|count| {
            check_record_count(count)
                .map_err(|reason| ConfigError::InvalidEnvVar(name.to_string(), reason))
        })
        .transpose()
}
