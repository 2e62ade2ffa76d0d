//! # Demo Data
//!
//! The data set a fresh dashboard shows on day one: three open orders, the
//! four standard categories and a starter menu.
//!
//! ## Usage
//! ```rust
//! use beachbar_core::seed::demo_dashboard;
//!
//! let dashboard = demo_dashboard();
//! assert_eq!(dashboard.categories().len(), 4);
//! assert_eq!(dashboard.menu().item_count(), 6);
//! ```

use chrono::{DateTime, TimeZone, Utc};

use crate::categories::CategoryStore;
use crate::dashboard::Dashboard;
use crate::menu::MenuStore;
use crate::money::Money;
use crate::orders::OrderStore;
use crate::types::{Category, MenuGroup, MenuItem, Order, OrderStatus};

fn seed_time(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 30, hour, minute, second)
        .single()
        .unwrap_or_default()
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Open orders, in the order they appear on the board.
pub fn demo_orders() -> Vec<Order> {
    vec![
        Order::new(4, "A4", lines(&["New Item 4"]), OrderStatus::New, seed_time(10, 40, 30)),
        Order::new(
            1,
            "A1",
            lines(&["Mojito", "Nachos"]),
            OrderStatus::Preparing,
            seed_time(14, 30, 0),
        ),
        Order::new(
            2,
            "B3",
            lines(&["Piña Colada", "Fish Tacos"]),
            OrderStatus::Preparing,
            seed_time(14, 15, 0),
        ),
    ]
}

pub fn demo_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Starters", 1),
        Category::new(2, "Main Courses", 2),
        Category::new(3, "Desserts", 3),
        Category::new(4, "Drinks", 4),
    ]
}

/// Desserts has no items yet, so it has no group either.
pub fn demo_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup::new(
            "Starters",
            vec![
                MenuItem::new("item-1", "Nachos", Money::from_major_minor(8, 99), 1),
                MenuItem::new("item-2", "Chicken Wings", Money::from_major_minor(10, 99), 1),
            ],
        ),
        MenuGroup::new(
            "Main Courses",
            vec![
                MenuItem::new("item-3", "Fish Tacos", Money::from_major_minor(14, 99), 2),
                MenuItem::new("item-4", "Beach Burger", Money::from_major_minor(12, 99), 2),
            ],
        ),
        MenuGroup::new(
            "Drinks",
            vec![
                MenuItem::new("item-5", "Mojito", Money::from_major_minor(7, 99), 4),
                MenuItem::new("item-6", "Piña Colada", Money::from_major_minor(8, 99), 4),
            ],
        ),
    ]
}

/// A dashboard loaded with the demo data, showing the orders view.
pub fn demo_dashboard() -> Dashboard {
    Dashboard::new(
        OrderStore::new(demo_orders()),
        CategoryStore::new(demo_categories()),
        MenuStore::new(demo_menu()),
    )
}
