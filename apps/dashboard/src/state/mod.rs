//! # State Module
//!
//! Host-side state for the dashboard.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────────┐    │
//! │  │   DashboardState         │      │   DashboardConfig            │    │
//! │  │                          │      │                              │    │
//! │  │  Arc<Mutex<Dashboard>>   │      │  bar_name                    │    │
//! │  │  orders / categories /   │      │  currency_symbol             │    │
//! │  │  menu / active view      │      │  default_view, seed flag     │    │
//! │  └──────────────────────────┘      └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DashboardState: every command takes the lock for its whole call     │
//! │  • DashboardConfig: read-only after startup                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod dashboard;

pub use config::DashboardConfig;
pub use dashboard::DashboardState;
