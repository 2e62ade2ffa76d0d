//! # Domain Types
//!
//! Core domain types used throughout the dashboard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │    Category     │   │    MenuItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64, ms)   │   │  id ("item-…")  │       │
//! │  │  umbrella       │   │  name           │   │  name, price    │       │
//! │  │  items          │   │  display_order  │◄──│  category_id    │       │
//! │  │  status         │   └─────────────────┘   └─────────────────┘       │
//! │  │  timestamp      │                                                    │
//! │  └─────────────────┘   ┌─────────────────┐   ┌─────────────────┐       │
//! │                        │  ReorderEvent   │   │   ActiveView    │       │
//! │  ┌─────────────────┐   │  ─────────────  │   │  ─────────────  │       │
//! │  │  OrderStatus    │   │  drag_type      │   │  Orders         │       │
//! │  │  New            │   │  source …       │   │  Completed      │       │
//! │  │  Preparing      │   │  destination?   │   │  Categories     │       │
//! │  │  Ready          │   └─────────────────┘   │  Menu           │       │
//! │  │  Completed      │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Structs cross the wire in camelCase, enums as lowercase tags, matching what
//! the rendering layer already speaks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// Order identifier.
pub type OrderId = i64;

/// Category identifier (creation time in milliseconds for new categories).
pub type CategoryId = i64;

/// Droppable id the rendering layer uses for the category list.
pub const CATEGORY_DROPPABLE: &str = "categories";

// =============================================================================
// Order Status
// =============================================================================

/// Where an order is in the bar's workflow.
///
/// ## Advisory Lifecycle
/// ```text
///   New ──► Preparing ──► Ready
///    │          │           │
///    └──────────┴───────────┴──► Completed
/// ```
/// Nothing enforces this: any status may overwrite any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Just arrived from the umbrella.
    #[default]
    New,
    /// The bar is working on it.
    Preparing,
    /// Waiting to be carried out.
    Ready,
    /// Delivered.
    Completed,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::New,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ];

    /// Wire name of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
        }
    }

    /// Actions an order card offers in this status.
    ///
    /// `Complete` is always available, even on completed orders.
    pub fn available_actions(&self) -> Vec<OrderAction> {
        let mut actions = Vec::with_capacity(2);
        match self {
            OrderStatus::New => actions.push(OrderAction::Prepare),
            OrderStatus::Preparing => actions.push(OrderAction::MarkReady),
            OrderStatus::Ready | OrderStatus::Completed => {}
        }
        actions.push(OrderAction::Complete);
        actions
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: OrderStatus::ALL.iter().map(|s| s.to_string()).collect(),
            })
    }
}

// =============================================================================
// Order Action
// =============================================================================

/// A button on an order card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderAction {
    /// new → preparing
    Prepare,
    /// preparing → ready
    MarkReady,
    /// anything → completed
    Complete,
}

impl OrderAction {
    /// The status an order gets when this action is taken.
    pub const fn target_status(&self) -> OrderStatus {
        match self {
            OrderAction::Prepare => OrderStatus::Preparing,
            OrderAction::MarkReady => OrderStatus::Ready,
            OrderAction::Complete => OrderStatus::Completed,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order placed from an umbrella.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Umbrella label, e.g. "A4".
    pub umbrella: String,
    /// Ordered item names as typed by the customer.
    pub items: Vec<String>,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: OrderId,
        umbrella: impl Into<String>,
        items: Vec<String>,
        status: OrderStatus,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Order {
            id,
            umbrella: umbrella.into(),
            items,
            status,
            timestamp,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A menu category such as "Starters".
///
/// ## Invariant
/// After every reorder `display_order == position + 1`. Adds append with
/// `count + 1`; removals leave gaps until the next reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub display_order: u32,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, display_order: u32) -> Self {
        Category {
            id,
            name: name.into(),
            display_order,
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// An item on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique token, `item-<uuid>` for items added at runtime.
    pub id: String,
    pub name: String,
    pub price: Money,
    /// Category the item was created under. Not rewritten on moves.
    pub category_id: CategoryId,
    /// Pick-one options ("Small", "Large").
    #[serde(default)]
    pub choices: Vec<String>,
    /// Extras that can be added ("Extra cheese").
    #[serde(default)]
    pub additions: Vec<String>,
    /// Ingredients that can be left out ("No onions").
    #[serde(default)]
    pub removals: Vec<String>,
}

impl MenuItem {
    /// Creates an item without modifiers.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category_id: CategoryId,
    ) -> Self {
        MenuItem {
            id: id.into(),
            name: name.into(),
            price,
            category_id,
            choices: Vec::new(),
            additions: Vec::new(),
            removals: Vec::new(),
        }
    }
}

/// Raw input of the "add menu item" form.
///
/// Everything is text, exactly as typed or selected; the menu store performs
/// the presence checks and coercions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub name: String,
    pub price: String,
    /// Category id as selected in the form (decimal text).
    pub category_id: String,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub additions: Vec<String>,
    #[serde(default)]
    pub removals: Vec<String>,
}

impl MenuItemDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        MenuItemDraft {
            name: name.into(),
            price: price.into(),
            category_id: category_id.into(),
            ..Default::default()
        }
    }

    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }

    pub fn with_additions(mut self, additions: Vec<String>) -> Self {
        self.additions = additions;
        self
    }

    pub fn with_removals(mut self, removals: Vec<String>) -> Self {
        self.removals = removals;
        self
    }
}

/// Items sharing a category name, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    pub category_name: String,
    pub items: Vec<MenuItem>,
}

impl MenuGroup {
    pub fn new(category_name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        MenuGroup {
            category_name: category_name.into(),
            items,
        }
    }
}

// =============================================================================
// Active View
// =============================================================================

/// Which top-level screen the rendering layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    /// New and preparing orders side by side.
    #[default]
    Orders,
    /// Completed orders.
    Completed,
    /// Category management.
    Categories,
    /// Menu item management.
    Menu,
}

impl ActiveView {
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Orders,
        ActiveView::Completed,
        ActiveView::Categories,
        ActiveView::Menu,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Orders => "orders",
            ActiveView::Completed => "completed",
            ActiveView::Categories => "categories",
            ActiveView::Menu => "menu",
        }
    }

    /// Order columns shown by this view, left to right.
    pub const fn order_statuses(&self) -> &'static [OrderStatus] {
        match self {
            ActiveView::Orders => &[OrderStatus::New, OrderStatus::Preparing],
            ActiveView::Completed => &[OrderStatus::Completed],
            ActiveView::Categories | ActiveView::Menu => &[],
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ActiveView::ALL
            .into_iter()
            .find(|view| view.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "view".to_string(),
                allowed: ActiveView::ALL.iter().map(|v| v.to_string()).collect(),
            })
    }
}

// =============================================================================
// Reorder Event
// =============================================================================

/// What was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DragType {
    /// A row of the category list.
    Category,
    /// A menu item inside a category group.
    MenuItem,
}

/// Lenient tag parsing: `"CATEGORY"` is a category drag, any other tag is a
/// menu item drag.
impl FromStr for DragType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("CATEGORY") {
            Ok(DragType::Category)
        } else {
            Ok(DragType::MenuItem)
        }
    }
}

/// A finished drag gesture, as reported by the rendering layer.
///
/// ```json
/// { "dragType": "MENU_ITEM", "sourceGroup": "Starters", "sourceIndex": 0,
///   "destinationGroup": "Drinks", "destinationIndex": 1 }
/// ```
/// A missing destination means the drag was dropped outside any target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReorderEvent {
    pub drag_type: DragType,
    pub source_group: String,
    pub source_index: usize,
    #[serde(default)]
    pub destination_group: Option<String>,
    #[serde(default)]
    pub destination_index: Option<usize>,
}

impl ReorderEvent {
    /// A drag inside the category list.
    pub fn category(source_index: usize, destination_index: Option<usize>) -> Self {
        ReorderEvent {
            drag_type: DragType::Category,
            source_group: CATEGORY_DROPPABLE.to_string(),
            source_index,
            destination_group: destination_index.map(|_| CATEGORY_DROPPABLE.to_string()),
            destination_index,
        }
    }

    /// A drag of a menu item, possibly across groups.
    pub fn menu_item(
        source_group: impl Into<String>,
        source_index: usize,
        destination: Option<(&str, usize)>,
    ) -> Self {
        ReorderEvent {
            drag_type: DragType::MenuItem,
            source_group: source_group.into(),
            source_index,
            destination_group: destination.map(|(group, _)| group.to_string()),
            destination_index: destination.map(|(_, index)| index),
        }
    }

    /// Destination group and index, if the drag landed somewhere.
    pub fn destination(&self) -> Option<(&str, usize)> {
        match (&self.destination_group, self.destination_index) {
            (Some(group), Some(index)) => Some((group.as_str(), index)),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::New);
    }

    #[test]
    fn test_order_status_parsing() {
        assert_eq!("preparing".parse::<OrderStatus>().unwrap(), OrderStatus::Preparing);
        assert_eq!(" Completed ".parse::<OrderStatus>().unwrap(), OrderStatus::Completed);
        assert!("served".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_available_actions() {
        assert_eq!(
            OrderStatus::New.available_actions(),
            vec![OrderAction::Prepare, OrderAction::Complete]
        );
        assert_eq!(
            OrderStatus::Preparing.available_actions(),
            vec![OrderAction::MarkReady, OrderAction::Complete]
        );
        assert_eq!(OrderStatus::Ready.available_actions(), vec![OrderAction::Complete]);
        assert_eq!(OrderStatus::Completed.available_actions(), vec![OrderAction::Complete]);
    }

    #[test]
    fn test_action_targets() {
        assert_eq!(OrderAction::Prepare.target_status(), OrderStatus::Preparing);
        assert_eq!(OrderAction::MarkReady.target_status(), OrderStatus::Ready);
        assert_eq!(OrderAction::Complete.target_status(), OrderStatus::Completed);
    }

    #[test]
    fn test_active_view_statuses() {
        assert_eq!(ActiveView::default(), ActiveView::Orders);
        assert_eq!(
            ActiveView::Orders.order_statuses(),
            &[OrderStatus::New, OrderStatus::Preparing]
        );
        assert!(ActiveView::Menu.order_statuses().is_empty());
        assert_eq!("categories".parse::<ActiveView>().unwrap(), ActiveView::Categories);
        assert!("kitchen".parse::<ActiveView>().is_err());
    }

    #[test]
    fn test_drag_type_tag_parsing() {
        assert_eq!("CATEGORY".parse::<DragType>().unwrap(), DragType::Category);
        assert_eq!("DEFAULT".parse::<DragType>().unwrap(), DragType::MenuItem);
    }

    #[test]
    fn test_reorder_event_wire_shape() {
        let event: ReorderEvent = serde_json::from_str(
            r#"{"dragType":"MENU_ITEM","sourceGroup":"Starters","sourceIndex":0,
                "destinationGroup":"Drinks","destinationIndex":1}"#,
        )
        .unwrap();
        assert_eq!(event, ReorderEvent::menu_item("Starters", 0, Some(("Drinks", 1))));
        assert_eq!(event.destination(), Some(("Drinks", 1)));

        let cancelled: ReorderEvent = serde_json::from_str(
            r#"{"dragType":"CATEGORY","sourceGroup":"categories","sourceIndex":2}"#,
        )
        .unwrap();
        assert_eq!(cancelled, ReorderEvent::category(2, None));
        assert_eq!(cancelled.destination(), None);
    }

    #[test]
    fn test_category_serializes_camel_case() {
        let json = serde_json::to_value(Category::new(1, "Starters", 1)).unwrap();
        assert_eq!(json["displayOrder"], 1);
        assert_eq!(json["name"], "Starters");
    }
}
