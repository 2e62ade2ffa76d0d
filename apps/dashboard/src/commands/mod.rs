//! # Commands Module
//!
//! All commands exposed to the rendering layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── orders.rs      ◄─── Order board, status changes, new orders
//! ├── categories.rs  ◄─── Category list
//! ├── menu.rs        ◄─── Menu items
//! ├── reorder.rs     ◄─── Drag & drop
//! ├── view.rs        ◄─── Active view, full snapshot
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Rendering layer                                                        │
//! │  ───────────────                                                        │
//! │  updateOrderStatus(4, "preparing")                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::orders::update_order_status(&state, 4, "preparing")          │
//! │         │                                                               │
//! │         ├── parse "preparing" ──► OrderStatus::Preparing                │
//! │         ├── lock dashboard, apply, unlock                               │
//! │         └── return fresh snapshot (unchanged on a no-op)                │
//! │         │                                                               │
//! │         ▼ (JSON serialization)                                          │
//! │  Rendering layer re-renders                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs: `&DashboardState`,
//! `&DashboardConfig`, or both.

pub mod categories;
pub mod config;
pub mod menu;
pub mod orders;
pub mod reorder;
pub mod view;

use beachbar_core::Outcome;
use tracing::debug;

/// Logs why a command left the dashboard unchanged.
pub(crate) fn log_outcome(command: &'static str, outcome: &Outcome) {
    if let Some(reason) = outcome.ignored_reason() {
        debug!(command, %reason, "Command ignored");
    }
}
