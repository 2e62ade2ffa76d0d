//! # Dashboard Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BEACHBAR_*`)
//! 2. Config file (`dashboard.toml`)
//! 3. Defaults (this file)
//!
//! ## Example `dashboard.toml`
//! ```toml
//! bar_name = "Playa Bonita"
//! currency_symbol = "€"
//! default_view = "menu"
//! seed_demo_data = false
//! log_filter = "info,beachbar=trace"
//! ```
//!
//! Configuration is read-only after startup, so no mutex is needed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use beachbar_core::{ActiveView, Money};

use crate::error::{ConfigError, ConfigResult};

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Shown in the dashboard header.
    pub bar_name: String,

    /// Prefix for displayed prices.
    pub currency_symbol: String,

    /// View shown when the dashboard opens.
    pub default_view: ActiveView,

    /// Start with the demo orders, categories and menu.
    pub seed_demo_data: bool,

    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            bar_name: "Beach Bar".to_string(),
            currency_symbol: "$".to_string(),
            default_view: ActiveView::Orders,
            seed_demo_data: true,
            log_filter: "info,beachbar=debug".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from file and environment.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading dashboard config from file");
                config = Self::read(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file body. Keys left out keep their defaults.
    pub fn parse(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn read(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.bar_name.trim().is_empty() {
            return Err(ConfigError::Invalid("bar_name must not be empty".into()));
        }

        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("currency_symbol must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("BEACHBAR_NAME") {
            debug!(bar_name = %name, "Overriding bar name from environment");
            self.bar_name = name;
        }

        if let Ok(symbol) = std::env::var("BEACHBAR_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Ok(view) = std::env::var("BEACHBAR_DEFAULT_VIEW") {
            match view.parse() {
                Ok(parsed) => {
                    debug!(view = %view, "Overriding default view from environment");
                    self.default_view = parsed;
                }
                Err(_) => warn!(view = %view, "Unknown view in environment"),
            }
        }

        if let Ok(seed) = std::env::var("BEACHBAR_SEED_DEMO") {
            match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.seed_demo_data = true,
                "0" | "false" | "no" => self.seed_demo_data = false,
                _ => warn!(value = %seed, "Unknown BEACHBAR_SEED_DEMO value in environment"),
            }
        }

        if let Ok(filter) = std::env::var("BEACHBAR_LOG") {
            self.log_filter = filter;
        }
    }

    /// `<config dir>/dashboard.toml` for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "beachbar", "dashboard")
            .map(|dirs| dirs.config_dir().join("dashboard.toml"))
    }

    /// Formats a price for display.
    ///
    /// Prices are always held in hundredths, so two decimals are shown.
    ///
    /// ## Example
    /// ```rust
    /// use beachbar_core::Money;
    /// use beachbar_dashboard::state::DashboardConfig;
    ///
    /// let config = DashboardConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(899)), "$8.99");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part().abs()
        )
    }
}
