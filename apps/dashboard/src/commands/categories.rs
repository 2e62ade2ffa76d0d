//! # Category Commands

use std::sync::Arc;

use tracing::debug;

use beachbar_core::{Category, CategoryId};

use super::log_outcome;
use crate::state::DashboardState;

pub fn get_categories(state: &DashboardState) -> Arc<Vec<Category>> {
    debug!("get_categories command");
    state.with_dashboard(|d| d.categories().snapshot())
}

/// Appends a category. A blank name changes nothing.
pub fn add_category(state: &DashboardState, name: String) -> Arc<Vec<Category>> {
    debug!(name = %name, "add_category command");

    state.with_dashboard_mut(|d| {
        let outcome = d.add_category(&name);
        log_outcome("add_category", &outcome);
        d.categories().snapshot()
    })
}

/// Deletes a category. Menu items filed under it are kept.
pub fn remove_category(state: &DashboardState, category_id: CategoryId) -> Arc<Vec<Category>> {
    debug!(category_id = %category_id, "remove_category command");

    state.with_dashboard_mut(|d| {
        let outcome = d.remove_category(category_id);
        log_outcome("remove_category", &outcome);
        d.categories().snapshot()
    })
}
