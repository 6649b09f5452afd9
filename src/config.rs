use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Hours during which dine-in bookings are accepted, `[open_hour, close_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingWindow {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl Default for ServingWindow {
    fn default() -> Self {
        Self {
            open_hour: 10,
            close_hour: 21,
        }
    }
}

impl ServingWindow {
    pub fn contains_hour(&self, hour: u32) -> bool {
        self.open_hour <= hour && hour < self.close_hour
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.open_hour >= self.close_hour || self.close_hour > 24 {
            return Err(ConfigError::InvalidWindow {
                open: self.open_hour,
                close: self.close_hour,
            });
        }
        Ok(())
    }
}

fn default_storage_key() -> String {
    "cart".to_string()
}

fn default_currency_symbol() -> String {
    "₱".to_string()
}

fn default_database_file() -> String {
    "order_cart.db".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Key the cart is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub serving_window: ServingWindow,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// SQLite file name, relative to the app data directory
    #[serde(default = "default_database_file")]
    pub database_file: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            serving_window: ServingWindow::default(),
            currency_symbol: default_currency_symbol(),
            database_file: default_database_file(),
        }
    }
}

impl CartConfig {
    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No cart config found, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), "Loaded cart config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: CartConfig = serde_json::from_str(raw)?;
        config.serving_window.validate()?;
        Ok(config)
    }
}
