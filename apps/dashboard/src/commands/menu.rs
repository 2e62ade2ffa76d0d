//! # Menu Commands
//!
//! Menu items grouped by category, with prices formatted for display.
//!
//! ## Add Item Form
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Name      [Gelato            ]                                         │
//! │  Price     [4.50              ]                                         │
//! │  Category  [Desserts        ▼]                                          │
//! │  Choices   [Vanilla] [Chocolate] [+]                                    │
//! │  Additions [Sprinkles] [+]                                              │
//! │  Removals  [+]                                                          │
//! │                                                   [Add item]            │
//! │                                                                         │
//! │  add_menu_item(draft) ──► item appended to the "Desserts" group         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use beachbar_core::{CategoryId, Dashboard, MenuGroup, MenuItem, MenuItemDraft, Money};

use super::log_outcome;
use crate::state::{DashboardConfig, DashboardState};

/// A menu item as listed, with its price already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub price_label: String,
    pub category_id: CategoryId,
    pub choices: Vec<String>,
    pub additions: Vec<String>,
    pub removals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroupView {
    pub category_name: String,
    pub items: Vec<MenuItemView>,
}

impl MenuItemView {
    fn new(item: &MenuItem, config: &DashboardConfig) -> Self {
        MenuItemView {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            price_label: config.format_currency(item.price),
            category_id: item.category_id,
            choices: item.choices.clone(),
            additions: item.additions.clone(),
            removals: item.removals.clone(),
        }
    }
}

impl MenuGroupView {
    fn new(group: &MenuGroup, config: &DashboardConfig) -> Self {
        MenuGroupView {
            category_name: group.category_name.clone(),
            items: group
                .items
                .iter()
                .map(|item| MenuItemView::new(item, config))
                .collect(),
        }
    }
}

fn menu_view(dashboard: &Dashboard, config: &DashboardConfig) -> Vec<MenuGroupView> {
    dashboard
        .menu()
        .groups()
        .iter()
        .map(|group| MenuGroupView::new(group, config))
        .collect()
}

/// Gets the menu, one entry per category group.
pub fn get_menu(state: &DashboardState, config: &DashboardConfig) -> Vec<MenuGroupView> {
    debug!("get_menu command");
    state.with_dashboard(|d| menu_view(d, config))
}

/// Adds a menu item from the form.
///
/// ## Behavior
/// - Blank name, price or category: nothing is added
/// - Price that is not a non-negative decimal: nothing is added
/// - Category no longer in the list: nothing is added
/// - Blank choice/addition/removal entries are dropped
pub fn add_menu_item(
    state: &DashboardState,
    config: &DashboardConfig,
    draft: MenuItemDraft,
) -> Vec<MenuGroupView> {
    debug!(name = %draft.name, category_id = %draft.category_id, "add_menu_item command");

    state.with_dashboard_mut(|d| {
        let outcome = d.add_menu_item(&draft);
        log_outcome("add_menu_item", &outcome);
        menu_view(d, config)
    })
}

/// Removes an item. Its group stays, even when left empty.
pub fn remove_menu_item(
    state: &DashboardState,
    config: &DashboardConfig,
    category_name: String,
    item_id: String,
) -> Vec<MenuGroupView> {
    debug!(category_name = %category_name, item_id = %item_id, "remove_menu_item command");

    state.with_dashboard_mut(|d| {
        let outcome = d.remove_menu_item(&category_name, &item_id);
        log_outcome("remove_menu_item", &outcome);
        menu_view(d, config)
    })
}
