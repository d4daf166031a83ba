//! # Ledger Configuration
//!
//! Configuration for the `discstore` host.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DISCSTORE_STORE_NAME="Corner Records"                              │
//! │     DISCSTORE_CURRENCY_SYMBOL="€"                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, else $DISCSTORE_CONFIG, else                      │
//! │     ~/.config/discstore/ledger.toml (Linux)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     "Disc Store", "$", built-in demo catalog                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Corner Records"
//! currency_symbol = "$"
//!
//! [[catalog]]
//! id = "JAZZ-001"
//! title = "Kind of Blue"
//! artist = "Miles Davis"
//! sale_price = "19.99"
//! purchase_price = "11.00"
//! quantity = 10
//! songs = ["So What", "Freddie Freeloader"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use discstore_core::validation::{
    validate_artist, validate_disc_id, validate_price, validate_title,
};
use discstore_core::Money;

use crate::error::{AppError, AppResult};

// =============================================================================
// Store Settings
// =============================================================================

/// Presentation settings for the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Shown in the listing header.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Prefix used when rendering prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Disc Store".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// One disc to register at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub artist: String,

    /// Decimal price, e.g. "19.99".
    pub sale_price: String,

    /// Decimal price, e.g. "11.00".
    pub purchase_price: String,

    #[serde(default)]
    pub quantity: u64,

    #[serde(default)]
    pub songs: Vec<String>,
}

impl CatalogEntry {
    /// Parses both prices.
    pub fn prices(&self) -> AppResult<(Money, Money)> {
        let sale: Money = self.sale_price.parse()?;
        let purchase: Money = self.purchase_price.parse()?;
        Ok((sale, purchase))
    }

    /// Runs the ledger validators over every field.
    pub fn validate(&self) -> AppResult<()> {
        validate_disc_id(&self.id)?;
        validate_title(&self.title)?;
        validate_artist(&self.artist)?;

        let (sale, purchase) = self.prices()?;
        validate_price("sale_price", sale)?;
        validate_price("purchase_price", purchase)?;

        Ok(())
    }
}

// =============================================================================
// Main Ledger Configuration
// =============================================================================

/// Complete host configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub store: StoreSettings,

    /// Discs to register. Empty means "use the demo catalog".
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

impl LedgerConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// `config_path` is the explicitly named file (`--config` or
    /// `$DISCSTORE_CONFIG`, resolved by the command line). It must exist.
    /// Without one, the platform default is read if present.
    pub fn load(config_path: Option<&Path>) -> AppResult<Self> {
        Self::load_with_default(config_path, Self::default_config_path())
    }

    fn load_with_default(
        config_path: Option<&Path>,
        default_path: Option<PathBuf>,
    ) -> AppResult<Self> {
        let mut config = match (config_path, default_path) {
            (Some(path), _) => Self::from_file(path)?,
            (None, Some(path)) if path.exists() => Self::from_file(&path)?,
            (None, Some(path)) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            (None, None) => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading ledger config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "store name must not be empty".into(),
            ));
        }

        for entry in &self.catalog {
            entry.validate().map_err(|e| {
                AppError::InvalidConfig(format!("catalog entry '{}': {}", entry.id, e))
            })?;
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("DISCSTORE_STORE_NAME") {
            debug!(name = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Ok(symbol) = std::env::var("DISCSTORE_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.store.currency_symbol = symbol;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "discstore")
            .map(|dirs| dirs.config_dir().join("ledger.toml"))
    }

    /// Formats a price with the configured currency symbol.
    pub fn format_price(&self, price: Money) -> String {
        price.format_with(&self.store.currency_symbol)
    }
}
