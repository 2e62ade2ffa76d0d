//! # Dashboard Coordinator
//!
//! Owns the three stores and is the only way to change them.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Rendering layer ──► Dashboard ──► store mutation ──► new snapshot ─┐  │
//! │        ▲                                                            │  │
//! │        └────────────────────── re-render ◄──────────────────────────┘  │
//! │                                                                         │
//! │  reorder(event)                                                        │
//! │     ├── DragType::Category  ──► CategoryStore::reorder                 │
//! │     └── DragType::MenuItem  ──► MenuStore::reorder                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::categories::CategoryStore;
use crate::error::{CoreError, Outcome};
use crate::menu::MenuStore;
use crate::orders::OrderStore;
use crate::types::{
    ActiveView, Category, CategoryId, DragType, MenuGroup, MenuItemDraft, Order, OrderAction,
    OrderId, OrderStatus, ReorderEvent,
};

/// Everything the rendering layer draws, captured at one instant.
///
/// Holding a snapshot is cheap (three `Arc` clones) and it never changes,
/// whatever happens to the dashboard afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub orders: Arc<Vec<Order>>,
    pub categories: Arc<Vec<Category>>,
    pub menu: Arc<Vec<MenuGroup>>,
    pub active_view: ActiveView,
}

/// The state coordinator.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    orders: OrderStore,
    categories: CategoryStore,
    menu: MenuStore,
    active_view: ActiveView,
}

impl Dashboard {
    pub fn new(orders: OrderStore, categories: CategoryStore, menu: MenuStore) -> Self {
        Dashboard {
            orders,
            categories,
            menu,
            active_view: ActiveView::default(),
        }
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    pub fn categories(&self) -> &CategoryStore {
        &self.categories
    }

    pub fn menu(&self) -> &MenuStore {
        &self.menu
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            orders: self.orders.snapshot(),
            categories: self.categories.snapshot(),
            menu: self.menu.snapshot(),
            active_view: self.active_view,
        }
    }

    /// Orders in `status`, original order preserved.
    pub fn filter_orders(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.filter_by_status(status)
    }

    /// Order columns of the active view, left to right.
    ///
    /// Management views show no orders and yield an empty list.
    pub fn visible_orders(&self) -> Vec<(OrderStatus, Vec<&Order>)> {
        self.active_view
            .order_statuses()
            .iter()
            .map(|status| (*status, self.orders.filter_by_status(*status)))
            .collect()
    }

    // =========================================================================
    // Orders
    // =========================================================================

    pub fn update_order_status(&mut self, id: OrderId, status: OrderStatus) -> Outcome {
        self.orders.update_status(id, status)
    }

    /// Applies an order card button.
    ///
    /// Same unguarded setter as [`update_order_status`](Self::update_order_status):
    /// the action need not be one the card currently offers.
    pub fn apply_order_action(&mut self, id: OrderId, action: OrderAction) -> Outcome {
        self.orders.update_status(id, action.target_status())
    }

    /// Records a new order placed now.
    pub fn place_order(&mut self, umbrella: &str, items: &[String]) -> Outcome {
        self.orders.place(umbrella, items, Utc::now())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub fn add_category(&mut self, name: &str) -> Outcome {
        self.categories.add(name)
    }

    /// Removes a category. Its menu items stay where they are.
    pub fn remove_category(&mut self, id: CategoryId) -> Outcome {
        self.categories.remove(id)
    }

    // =========================================================================
    // Menu Items
    // =========================================================================

    /// Adds a menu item, resolving its category against the current list.
    pub fn add_menu_item(&mut self, draft: &MenuItemDraft) -> Outcome {
        self.menu.add(draft, self.categories.categories())
    }

    pub fn remove_menu_item(&mut self, category_name: &str, item_id: &str) -> Outcome {
        self.menu.remove(category_name, item_id)
    }

    // =========================================================================
    // Drag & Drop
    // =========================================================================

    /// Routes a finished drag to the store it belongs to.
    pub fn reorder(&mut self, event: &ReorderEvent) -> Outcome {
        match event.drag_type {
            DragType::Category => self
                .categories
                .reorder(event.source_index, event.destination_index),
            DragType::MenuItem => match event.destination() {
                Some((group, index)) => {
                    self.menu
                        .reorder(&event.source_group, event.source_index, group, index)
                }
                None => Outcome::Ignored(CoreError::DragCancelled),
            },
        }
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Switches the top-level view. Data is untouched.
    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::MenuItem;

    fn item_a() -> MenuItem {
        MenuItem::new("item-a", "A", Money::from_cents(500), 1)
    }

    /// Categories [Starters(1), Drinks(2)], items {Starters: [A]}
    fn small_dashboard() -> Dashboard {
        Dashboard::new(
            OrderStore::default(),
            CategoryStore::new(vec![
                Category::new(1, "Starters", 1),
                Category::new(2, "Drinks", 2),
            ]),
            MenuStore::new(vec![MenuGroup::new("Starters", vec![item_a()])]),
        )
    }

    #[test]
    fn test_item_moves_into_group_without_items() {
        let mut dashboard = small_dashboard();

        let outcome = dashboard.reorder(&ReorderEvent::menu_item("Starters", 0, Some(("Drinks", 0))));

        assert!(outcome.is_applied());
        assert_eq!(
            dashboard.menu().groups(),
            &[
                MenuGroup::new("Starters", vec![]),
                MenuGroup::new("Drinks", vec![item_a()]),
            ]
        );
    }

    #[test]
    fn test_category_drag_goes_to_category_store() {
        let mut dashboard = small_dashboard();
        let menu_before = dashboard.menu().groups().to_vec();

        dashboard.reorder(&ReorderEvent::category(1, Some(0)));

        let names: Vec<&str> = dashboard
            .categories()
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Drinks", "Starters"]);
        assert_eq!(dashboard.menu().groups(), menu_before.as_slice());
    }

    #[test]
    fn test_cancelled_drags_are_noops() {
        let mut dashboard = small_dashboard();
        let before = dashboard.snapshot();

        let category = dashboard.reorder(&ReorderEvent::category(0, None));
        let item = dashboard.reorder(&ReorderEvent::menu_item("Starters", 0, None));

        assert_eq!(category.ignored_reason(), Some(&CoreError::DragCancelled));
        assert_eq!(item.ignored_reason(), Some(&CoreError::DragCancelled));
        assert_eq!(dashboard.snapshot(), before);
    }

    #[test]
    fn test_removing_category_does_not_cascade() {
        let mut dashboard = small_dashboard();

        dashboard.remove_category(1);

        // Pinned: the Starters group and its item outlive the category
        assert!(dashboard.categories().get(1).is_none());
        assert_eq!(dashboard.menu().items("Starters"), &[item_a()]);
    }

    #[test]
    fn test_add_menu_item_uses_current_categories() {
        let mut dashboard = small_dashboard();
        dashboard.add_category("Desserts");
        let desserts_id = dashboard.categories().categories()[2].id;

        let outcome =
            dashboard.add_menu_item(&MenuItemDraft::new("Gelato", "4.50", desserts_id.to_string()));

        assert!(outcome.is_applied());
        assert_eq!(dashboard.menu().items("Desserts")[0].category_id, desserts_id);

        dashboard.remove_category(desserts_id);
        let outcome =
            dashboard.add_menu_item(&MenuItemDraft::new("Tiramisu", "6", desserts_id.to_string()));
        assert_eq!(
            outcome.ignored_reason(),
            Some(&CoreError::CategoryNotFound(desserts_id))
        );
    }

    #[test]
    fn test_order_actions() {
        let mut dashboard = small_dashboard();
        dashboard.place_order("A1", &["Mojito".to_string()]);

        dashboard.apply_order_action(1, OrderAction::Prepare);
        assert_eq!(dashboard.filter_orders(OrderStatus::Preparing).len(), 1);

        dashboard.apply_order_action(1, OrderAction::Complete);
        assert_eq!(dashboard.filter_orders(OrderStatus::Completed).len(), 1);
        assert!(dashboard.filter_orders(OrderStatus::Preparing).is_empty());
    }

    #[test]
    fn test_active_view_only_changes_view() {
        let mut dashboard = small_dashboard();
        let before = dashboard.snapshot();

        dashboard.set_active_view(ActiveView::Menu);

        let after = dashboard.snapshot();
        assert_eq!(after.active_view, ActiveView::Menu);
        assert_eq!(after.orders, before.orders);
        assert_eq!(after.categories, before.categories);
        assert_eq!(after.menu, before.menu);
        assert!(dashboard.visible_orders().is_empty());
    }

    #[test]
    fn test_visible_orders_follow_view() {
        let mut dashboard = small_dashboard();
        dashboard.place_order("A1", &["Mojito".to_string()]);
        dashboard.place_order("B3", &["Nachos".to_string()]);
        dashboard.update_order_status(2, OrderStatus::Preparing);

        let columns = dashboard.visible_orders();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].0, OrderStatus::New);
        assert_eq!(columns[0].1[0].umbrella, "A1");
        assert_eq!(columns[1].0, OrderStatus::Preparing);
        assert_eq!(columns[1].1[0].umbrella, "B3");

        dashboard.set_active_view(ActiveView::Completed);
        assert!(dashboard.visible_orders()[0].1.is_empty());
    }

    #[test]
    fn test_snapshot_is_stable_across_mutations() {
        let mut dashboard = small_dashboard();
        let snapshot = dashboard.snapshot();

        dashboard.add_category("Snacks");
        dashboard.reorder(&ReorderEvent::menu_item("Starters", 0, Some(("Drinks", 0))));

        assert_eq!(snapshot.categories.len(), 2);
        assert_eq!(snapshot.menu.len(), 1);
        assert_eq!(snapshot.menu[0].items, vec![item_a()]);
    }
}
