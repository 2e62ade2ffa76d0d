//! # Order Store
//!
//! Holds the session's orders and moves them through their statuses.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Store Operations                               │
//! │                                                                         │
//! │  Card Button              Store Call                 State Change       │
//! │  ───────────              ──────────                 ────────────       │
//! │                                                                         │
//! │  Prepare ───────────────► update_status(id, Preparing) ──► status = …   │
//! │  Ready ─────────────────► update_status(id, Ready) ──────► status = …   │
//! │  Complete ──────────────► update_status(id, Completed) ──► status = …   │
//! │                                                                         │
//! │  Column render ─────────► filter_by_status(s) ───────────► (read only)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The collection is copy-on-write: [`OrderStore::snapshot`] hands out the
//! current `Arc`, and a later mutation clones before writing, so the snapshot
//! never changes under its holder.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult, Outcome, ValidationError};
use crate::types::{Order, OrderId, OrderStatus};
use crate::validation::{clean_entries, validate_required};

/// The list of orders, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Arc<Vec<Order>>,
}

impl OrderStore {
    /// Creates a store from existing orders (seed data or an external feed).
    pub fn new(orders: Vec<Order>) -> Self {
        OrderStore {
            orders: Arc::new(orders),
        }
    }

    /// All orders in their original order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Shares the current version of the list.
    pub fn snapshot(&self) -> Arc<Vec<Order>> {
        Arc::clone(&self.orders)
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Overwrites the status of an order.
    ///
    /// No transition rules: a completed order can be sent back to `New`.
    /// Unknown ids are ignored.
    pub fn update_status(&mut self, id: OrderId, status: OrderStatus) -> Outcome {
        self.try_update_status(id, status).into()
    }

    fn try_update_status(&mut self, id: OrderId, status: OrderStatus) -> CoreResult<()> {
        let position = self
            .orders
            .iter()
            .position(|order| order.id == id)
            .ok_or(CoreError::OrderNotFound(id))?;

        Arc::make_mut(&mut self.orders)[position].status = status;
        Ok(())
    }

    /// Orders currently in `status`, in their original relative order.
    pub fn filter_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.status == status)
            .collect()
    }

    /// Records a new order from an umbrella.
    ///
    /// The order gets the next free id (highest existing + 1), status `New`
    /// and the given timestamp. Blank item names are dropped; an order with a
    /// blank umbrella or nothing left to serve is ignored.
    pub fn place(&mut self, umbrella: &str, items: &[String], at: DateTime<Utc>) -> Outcome {
        self.try_place(umbrella, items, at).into()
    }

    fn try_place(&mut self, umbrella: &str, items: &[String], at: DateTime<Utc>) -> CoreResult<()> {
        let umbrella = validate_required("umbrella", umbrella)?;
        let items = clean_entries(items);
        if items.is_empty() {
            return Err(ValidationError::Required {
                field: "items".to_string(),
            }
            .into());
        }

        let id = self.next_id();
        Arc::make_mut(&mut self.orders).push(Order::new(
            id,
            umbrella,
            items,
            OrderStatus::New,
            at,
        ));
        Ok(())
    }

    /// Id the next placed order will receive.
    pub fn next_id(&self) -> OrderId {
        self.orders.iter().map(|order| order.id).max().unwrap_or(0) + 1
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
