//! Process-environment configuration.
//!
//! The engine itself never reads globals; credentials and environment are
//! resolved here once and handed to the service layer as plain values.

use std::env;

/// External API credentials and environment name.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// data.go.kr serviceKey for `getStockPriceInfo`.
    pub stock_price_api_key: String,
    /// opendart.fss.or.kr certificate key.
    pub dart_api_key: String,
    pub environment: String,
}

impl Config {
    /// Load from the process environment, reading `.env` first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            stock_price_api_key: trimmed_var("STOCK_PRICE_API_KEY"),
            dart_api_key: trimmed_var("DART_API_KEY"),
            environment: get_environment(),
        }
    }
}

/// Deployment environment name, defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn trimmed_var(key: &str) -> String {
    env::var(key).unwrap_or_default().trim().to_string()
}
