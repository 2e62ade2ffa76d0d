//! # View Commands
//!
//! Top-level navigation and the full dashboard snapshot.

use tracing::debug;

use beachbar_core::{ActiveView, DashboardSnapshot};

use crate::error::ApiError;
use crate::state::DashboardState;

/// Everything the rendering layer draws.
pub fn get_dashboard(state: &DashboardState) -> DashboardSnapshot {
    debug!("get_dashboard command");
    state.snapshot()
}

pub fn get_active_view(state: &DashboardState) -> ActiveView {
    state.with_dashboard(|d| d.active_view())
}

/// Switches between orders, completed, categories and menu.
///
/// ## Errors
/// `view` names no known view.
pub fn set_active_view(state: &DashboardState, view: String) -> Result<ActiveView, ApiError> {
    debug!(view = %view, "set_active_view command");

    let view: ActiveView = view.parse()?;
    state.with_dashboard_mut(|d| d.set_active_view(view));
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use beachbar_core::seed::demo_dashboard;

    #[test]
    fn test_set_active_view() {
        let state = DashboardState::new(demo_dashboard());
        let before = get_dashboard(&state);

        assert_eq!(set_active_view(&state, "categories".to_string()).unwrap(), ActiveView::Categories);

        let after = get_dashboard(&state);
        assert_eq!(after.active_view, ActiveView::Categories);
        assert_eq!(after.orders, before.orders);
        assert_eq!(after.menu, before.menu);
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        let state = DashboardState::new(demo_dashboard());

        let err = set_active_view(&state, "kitchen".to_string()).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_active_view(&state), ActiveView::Orders);
    }
}
