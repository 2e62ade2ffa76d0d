//! # Beach Bar Dashboard Host
//!
//! Host layer of the beach bar order and menu dashboard. A rendering layer
//! calls the functions in [`commands`]; all state logic lives in
//! `beachbar-core`.
//!
//! ## Module Organization
//! ```text
//! beachbar_dashboard/
//! ├── lib.rs          ◄─── You are here (startup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── dashboard.rs◄─── Shared dashboard behind a Mutex
//! │   └── config.rs   ◄─── dashboard.toml + BEACHBAR_* overrides
//! ├── commands/
//! │   ├── orders.rs   ◄─── Order board commands
//! │   ├── categories.rs
//! │   ├── menu.rs
//! │   ├── reorder.rs  ◄─── Drag & drop
//! │   ├── view.rs
//! │   └── config.rs
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use beachbar_core::seed::demo_dashboard;
use beachbar_core::Dashboard;

use error::ConfigResult;
use state::{DashboardConfig, DashboardState};

/// Loads configuration, starts logging and builds the dashboard.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Dashboard Startup                                 │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults ◄── dashboard.toml ◄── BEACHBAR_* variables              │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG if set, otherwise config.log_filter                      │
/// │                                                                         │
/// │  3. Build State ──────────────────────────────────────────────────────► │
/// │     • demo data or empty stores                                         │
/// │     • configured default view                                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn start(config_path: Option<PathBuf>) -> ConfigResult<(DashboardConfig, DashboardState)> {
    let config = DashboardConfig::load(config_path)?;
    init_tracing(&config.log_filter);

    info!(bar_name = %config.bar_name, "Starting Beach Bar Dashboard");
    let state = bootstrap(&config);

    Ok((config, state))
}

/// Builds the dashboard state described by `config`.
pub fn bootstrap(config: &DashboardConfig) -> DashboardState {
    let mut dashboard = if config.seed_demo_data {
        demo_dashboard()
    } else {
        Dashboard::default()
    };
    dashboard.set_active_view(config.default_view);

    info!(
        orders = dashboard.orders().len(),
        categories = dashboard.categories().len(),
        menu_items = dashboard.menu().item_count(),
        view = %config.default_view,
        "State initialized"
    );

    DashboardState::new(dashboard)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages, including ignored commands
/// - `RUST_LOG=beachbar=trace` - Trace for beachbar crates only
/// - Default: `fallback_filter`
///
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(fallback_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use beachbar_core::ActiveView;

    #[test]
    fn test_bootstrap_with_demo_data() {
        let config = DashboardConfig::default();

        let state = bootstrap(&config);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.orders.len(), 3);
        assert_eq!(snapshot.categories.len(), 4);
        assert_eq!(snapshot.active_view, ActiveView::Orders);
    }

    #[test]
    fn test_bootstrap_empty() {
        let config = DashboardConfig {
            seed_demo_data: false,
            default_view: ActiveView::Menu,
            ..DashboardConfig::default()
        };

        let snapshot = bootstrap(&config).snapshot();

        assert!(snapshot.orders.is_empty());
        assert!(snapshot.categories.is_empty());
        assert!(snapshot.menu.is_empty());
        assert_eq!(snapshot.active_view, ActiveView::Menu);
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing("info");
        assert!(!init_tracing("info"));
    }
}
