//! Unified error handling for analytics.

use shop_pulse_core::EmailError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while generating or shaping dashboard data.
#[derive(Debug, Error, PartialEq)]
pub enum AnalyticsError {
    /// A weighted distribution is empty, negative, or does not sum to one.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// A table was asked to sort by a column it does not have.
    #[error("Unknown sort key for {table} table: {key}")]
    UnknownSortKey {
        /// Table identifier.
        table: &'static str,
        /// The rejected key.
        key: String,
    },

    /// A filter combination can never match anything.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// A window or period count is outside what the views support.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A generated email address failed validation.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience result alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::UnknownSortKey {
            table: "orders",
            key: "color".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown sort key for orders table: color");

        let err = AnalyticsError::InvalidFilter("min price above max price".to_string());
        assert_eq!(err.to_string(), "Invalid filter: min price above max price");

        let err = AnalyticsError::OutOfRange("days must be between 1 and 366".to_string());
        assert_eq!(err.to_string(), "Out of range: days must be between 1 and 366");
    }

    #[test]
    fn test_config_error_converts() {
        let err: AnalyticsError =
            ConfigError::InvalidEnvVar("PULSE_SEED".to_string(), "not a number".to_string()).into();
        assert!(matches!(err, AnalyticsError::Config(_)));
    }
}
