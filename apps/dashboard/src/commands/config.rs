//! # Config Commands

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DashboardConfig;

/// Gets the current configuration.
///
/// ## When Used
/// - Startup (bar name in the header)
/// - Currency formatting in the rendering layer
pub fn get_config(config: &DashboardConfig) -> DashboardConfig {
    debug!("get_config command");
    config.clone()
}

/// Re-reads `dashboard.toml` (or `path`) and the `BEACHBAR_*` overrides.
///
/// The caller swaps the returned config in; dashboard data is untouched.
///
/// ## Errors
/// The file cannot be read, is not valid TOML, or fails validation.
pub fn reload_config(path: Option<PathBuf>) -> Result<DashboardConfig, ApiError> {
    debug!(path = ?path, "reload_config command");

    let config = DashboardConfig::load(path)?;
    info!(bar_name = %config.bar_name, "Dashboard config reloaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "beachbar-reload-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reload_config() {
        let path = temp_config("ok", "bar_name = \"Tiki Hut\"\ndefault_view = \"menu\"\n");

        let config = reload_config(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.bar_name, "Tiki Hut");
        assert_eq!(get_config(&config), config);
    }

    #[test]
    fn test_reload_broken_file_is_config_error() {
        let path = temp_config("broken", "bar_name = [unterminated\n");

        let err = reload_config(Some(path.clone())).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_reload_invalid_values_is_config_error() {
        let path = temp_config("invalid", "currency_symbol = \"\"\n");

        let err = reload_config(Some(path.clone())).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}
