//! # beachbar-core: Pure State Logic for the Beach Bar Dashboard
//!
//! This crate holds the order, category and menu state of the dashboard as
//! plain values with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Beach Bar Dashboard Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Rendering layer (browser)                    │   │
//! │  │    Order board ──► Category list ──► Menu groups (drag & drop)  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/dashboard (host layer)                     │   │
//! │  │    update_order_status, add_category, reorder, set_view, …     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ beachbar-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  orders   │  │ categories │  │   menu    │  │ dashboard │  │   │
//! │  │   │   Store   │  │   Store    │  │   Store   │  │coordinator│  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • COPY-ON-WRITE SNAPSHOTS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, Category, MenuItem, ReorderEvent, ...)
//! - [`orders`] - Order list, status changes, filtering
//! - [`categories`] - Category list with dense display order
//! - [`menu`] - Menu items grouped by category name
//! - [`dashboard`] - Coordinator owning the stores
//! - [`money`] - Integer-cent prices
//! - [`error`] - `Outcome`, `CoreError`, `ValidationError`
//! - [`validation`] - Presence checks and form coercions
//! - [`seed`] - Demo data
//!
//! ## Design Principles
//!
//! 1. **Silent No-Ops**: invalid input leaves state untouched; nothing panics
//!    or raises, the returned [`Outcome`] merely says why
//! 2. **No Ambient State**: stores are values owned by one [`Dashboard`]
//! 3. **Integer Money**: prices are cents, parsed straight from form text
//!
//! ## Example Usage
//!
//! ```rust
//! use beachbar_core::{Dashboard, OrderStatus, ReorderEvent};
//! use beachbar_core::seed::demo_dashboard;
//!
//! let mut dashboard: Dashboard = demo_dashboard();
//!
//! dashboard.update_order_status(4, OrderStatus::Preparing);
//! assert_eq!(dashboard.filter_orders(OrderStatus::Preparing).len(), 3);
//!
//! // Drag "Nachos" from Starters to the top of Drinks
//! dashboard.reorder(&ReorderEvent::menu_item("Starters", 0, Some(("Drinks", 0))));
//! assert_eq!(dashboard.menu().items("Drinks")[0].name, "Nachos");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod categories;
pub mod dashboard;
pub mod error;
pub mod menu;
pub mod money;
pub mod orders;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use categories::CategoryStore;
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use error::{CoreError, CoreResult, Outcome, ValidationError};
pub use menu::MenuStore;
pub use money::Money;
pub use orders::OrderStore;
pub use types::*;
