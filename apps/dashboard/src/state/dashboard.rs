//! # Dashboard State
//!
//! The single dashboard instance, shared between command calls.
//!
//! The dashboard is wrapped in `Arc<Mutex<T>>` so a command sees it whole:
//! a reorder and a status change can never interleave halfway through.

use std::sync::{Arc, Mutex, PoisonError};

use beachbar_core::{Dashboard, DashboardSnapshot};

/// Thread-safe handle to the dashboard.
///
/// Cloning the handle shares the same dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    dashboard: Arc<Mutex<Dashboard>>,
}

impl DashboardState {
    pub fn new(dashboard: Dashboard) -> Self {
        DashboardState {
            dashboard: Arc::new(Mutex::new(dashboard)),
        }
    }

    /// Executes a function with read access to the dashboard.
    ///
    /// ## Example
    /// ```rust
    /// use beachbar_dashboard::state::DashboardState;
    ///
    /// let state = DashboardState::default();
    /// let count = state.with_dashboard(|d| d.orders().len());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_dashboard<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Dashboard) -> R,
    {
        // Store methods never panic while holding the lock, so a poisoned
        // mutex still guards a consistent dashboard.
        let dashboard = self.dashboard.lock().unwrap_or_else(PoisonError::into_inner);
        f(&dashboard)
    }

    /// Executes a function with write access to the dashboard.
    pub fn with_dashboard_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Dashboard) -> R,
    {
        let mut dashboard = self.dashboard.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut dashboard)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.with_dashboard(Dashboard::snapshot)
    }
}
