//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KEYMASTER_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use keymaster_core::{TaxRate, DEFAULT_TAX_RATE_BPS, LOW_STOCK_THRESHOLD};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shop name (displayed on receipts)
    pub shop_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// VAT rate in basis points (1500 = 15%)
    pub tax_rate_bps: u32,

    /// Stock level below which a product is flagged on the dashboard
    pub low_stock_threshold: i64,
}

impl Default for ConfigState {
    /// Returns the shop's standing configuration.
    fn default() -> Self {
        ConfigState {
            shop_name: "KeyMaster Store".to_string(),
            currency_code: "SAR".to_string(),
            currency_symbol: "SR".to_string(),
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KEYMASTER_STORE_NAME`: Override shop name
    /// - `KEYMASTER_TAX_RATE`: Override VAT rate as a percentage ("15")
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(name) = std::env::var("KEYMASTER_STORE_NAME") {
            config.shop_name = name;
        }

        if let Ok(rate_str) = std::env::var("KEYMASTER_TAX_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                config.tax_rate_bps = (rate * 100.0).round() as u32;
            }
        }

        config
    }

    /// The configured tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(2550), "25.50 SR");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        format!(
            "{}{}.{:02} {}",
            sign,
            (cents / 100).abs(),
            (cents % 100).abs(),
            self.currency_symbol
        )
    }
}
