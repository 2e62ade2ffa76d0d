//! # Order Commands
//!
//! Commands behind the order board.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐  Prepare  ┌───────────┐ MarkReady ┌──────────┐           │
//! │  │   New    │──────────►│ Preparing │──────────►│  Ready   │           │
//! │  └──────────┘           └───────────┘           └──────────┘           │
//! │       │                       │                      │                  │
//! │       └───────────────────────┴──────────────────────┘                  │
//! │                               │ Complete                                │
//! │                               ▼                                         │
//! │                        ┌────────────┐                                   │
//! │                        │ Completed  │                                   │
//! │                        └────────────┘                                   │
//! │                                                                         │
//! │  place_order ──► New        update_order_status ──► any status          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use beachbar_core::{ActiveView, Dashboard, Order, OrderAction, OrderId, OrderStatus};

use super::log_outcome;
use crate::error::ApiError;
use crate::state::DashboardState;

/// An order with the buttons its card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCard {
    pub order: Order,
    pub actions: Vec<OrderAction>,
}

/// One column of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderColumn {
    pub status: OrderStatus,
    pub orders: Vec<OrderCard>,
}

/// The columns the active view shows.
///
/// Management views have no columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBoardResponse {
    pub view: ActiveView,
    pub columns: Vec<OrderColumn>,
}

impl From<&Dashboard> for OrderBoardResponse {
    fn from(dashboard: &Dashboard) -> Self {
        let columns = dashboard
            .visible_orders()
            .into_iter()
            .map(|(status, orders)| OrderColumn {
                status,
                orders: orders
                    .into_iter()
                    .map(|order| OrderCard {
                        order: order.clone(),
                        actions: order.status.available_actions(),
                    })
                    .collect(),
            })
            .collect();

        OrderBoardResponse {
            view: dashboard.active_view(),
            columns,
        }
    }
}

/// Gets the order board for the active view.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ORDERS                                                                 │
/// │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
/// │  │  NEW                         │  │  PREPARING                   │    │
/// │  │  #4  A4  10:40               │  │  #1  A1  14:30               │    │
/// │  │  New Item 4                  │  │  Mojito, Nachos              │    │
/// │  │  [Prepare] [Complete]        │  │  [Ready] [Complete]          │    │
/// │  └──────────────────────────────┘  └──────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_order_board(state: &DashboardState) -> OrderBoardResponse {
    debug!("get_order_board command");
    state.with_dashboard(|d| OrderBoardResponse::from(d))
}

/// Lists orders, optionally only those in one status.
pub fn get_orders(state: &DashboardState, status: Option<String>) -> Result<Vec<Order>, ApiError> {
    debug!(status = ?status, "get_orders command");

    let status = status.map(|s| s.parse::<OrderStatus>()).transpose()?;

    Ok(state.with_dashboard(|d| match status {
        Some(status) => d.filter_orders(status).into_iter().cloned().collect(),
        None => d.orders().orders().to_vec(),
    }))
}

/// Sets an order's status.
///
/// An unknown order id changes nothing; the unchanged list comes back.
///
/// ## Errors
/// `status` is not one of `new`, `preparing`, `ready`, `completed`.
pub fn update_order_status(
    state: &DashboardState,
    order_id: OrderId,
    status: String,
) -> Result<Arc<Vec<Order>>, ApiError> {
    debug!(order_id = %order_id, status = %status, "update_order_status command");

    let status: OrderStatus = status.parse()?;

    Ok(state.with_dashboard_mut(|d| {
        let outcome = d.update_order_status(order_id, status);
        log_outcome("update_order_status", &outcome);
        d.orders().snapshot()
    }))
}

/// Applies an order card button.
pub fn apply_order_action(
    state: &DashboardState,
    order_id: OrderId,
    action: OrderAction,
) -> OrderBoardResponse {
    debug!(order_id = %order_id, action = ?action, "apply_order_action command");

    state.with_dashboard_mut(|d| {
        let outcome = d.apply_order_action(order_id, action);
        log_outcome("apply_order_action", &outcome);
        OrderBoardResponse::from(&*d)
    })
}

/// Records a new order from an umbrella.
pub fn place_order(
    state: &DashboardState,
    umbrella: String,
    items: Vec<String>,
) -> OrderBoardResponse {
    debug!(umbrella = %umbrella, items = items.len(), "place_order command");

    state.with_dashboard_mut(|d| {
        let outcome = d.place_order(&umbrella, &items);
        log_outcome("place_order", &outcome);
        OrderBoardResponse::from(&*d)
    })
}
