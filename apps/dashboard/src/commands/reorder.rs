//! # Drag & Drop Commands
//!
//! The rendering layer reports every finished drag here.
//!
//! ## Drag End Payload
//! ```json
//! {
//!   "dragType": "MENU_ITEM",
//!   "sourceGroup": "Starters",
//!   "sourceIndex": 0,
//!   "destinationGroup": "Drinks",
//!   "destinationIndex": 1
//! }
//! ```
//! `dragType` is matched leniently: `"CATEGORY"` reorders categories, any
//! other tag moves a menu item. A drop outside every target leaves both
//! destination fields out or null.

use serde::Deserialize;
use tracing::debug;

use beachbar_core::{DashboardSnapshot, DragType, ReorderEvent};

use super::log_outcome;
use crate::error::ApiError;
use crate::state::DashboardState;

/// A drag-end notification exactly as the drag & drop library sends it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEndPayload {
    pub drag_type: String,
    pub source_group: String,
    pub source_index: usize,
    #[serde(default)]
    pub destination_group: Option<String>,
    #[serde(default)]
    pub destination_index: Option<usize>,
}

impl From<DragEndPayload> for ReorderEvent {
    fn from(payload: DragEndPayload) -> Self {
        let drag_type = match payload.drag_type.parse::<DragType>() {
            Ok(drag_type) => drag_type,
            Err(never) => match never {},
        };

        ReorderEvent {
            drag_type,
            source_group: payload.source_group,
            source_index: payload.source_index,
            destination_group: payload.destination_group,
            destination_index: payload.destination_index,
        }
    }
}

/// Applies a finished drag and returns the whole dashboard.
///
/// Cancelled drags and out-of-range positions leave everything as it was.
pub fn handle_drag_end(state: &DashboardState, payload: DragEndPayload) -> DashboardSnapshot {
    let event = ReorderEvent::from(payload);
    debug!(
        drag_type = ?event.drag_type,
        source_group = %event.source_group,
        source_index = event.source_index,
        destination_group = ?event.destination_group,
        destination_index = ?event.destination_index,
        "handle_drag_end command"
    );

    state.with_dashboard_mut(|d| {
        let outcome = d.reorder(&event);
        log_outcome("handle_drag_end", &outcome);
        d.snapshot()
    })
}

/// [`handle_drag_end`] for a raw JSON body.
///
/// ## Errors
/// The body is not a drag-end payload.
pub fn handle_drag_end_json(
    state: &DashboardState,
    body: &str,
) -> Result<DashboardSnapshot, ApiError> {
    let payload: DragEndPayload = serde_json::from_str(body)?;
    Ok(handle_drag_end(state, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use beachbar_core::seed::demo_dashboard;

    fn names(snapshot: &DashboardSnapshot, group: &str) -> Vec<String> {
        snapshot
            .menu
            .iter()
            .find(|g| g.category_name == group)
            .map(|g| g.items.iter().map(|i| i.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_move_item_across_groups() {
        let state = DashboardState::new(demo_dashboard());

        let snapshot = handle_drag_end_json(
            &state,
            r#"{"dragType":"MENU_ITEM","sourceGroup":"Starters","sourceIndex":0,
                "destinationGroup":"Drinks","destinationIndex":1}"#,
        )
        .unwrap();

        assert_eq!(names(&snapshot, "Starters"), vec!["Chicken Wings"]);
        assert_eq!(names(&snapshot, "Drinks"), vec!["Mojito", "Nachos", "Piña Colada"]);
    }

    #[test]
    fn test_move_item_into_missing_group() {
        let state = DashboardState::new(demo_dashboard());

        let snapshot = handle_drag_end_json(
            &state,
            r#"{"dragType":"MENU_ITEM","sourceGroup":"Drinks","sourceIndex":1,
                "destinationGroup":"Desserts","destinationIndex":0}"#,
        )
        .unwrap();

        assert_eq!(names(&snapshot, "Desserts"), vec!["Piña Colada"]);
        assert_eq!(snapshot.menu.last().unwrap().category_name, "Desserts");
    }

    #[test]
    fn test_category_drag_renumbers() {
        let state = DashboardState::new(demo_dashboard());

        let snapshot = handle_drag_end_json(
            &state,
            r#"{"dragType":"CATEGORY","sourceGroup":"categories","sourceIndex":3,
                "destinationGroup":"categories","destinationIndex":0}"#,
        )
        .unwrap();

        let order: Vec<(&str, u32)> = snapshot
            .categories
            .iter()
            .map(|c| (c.name.as_str(), c.display_order))
            .collect();
        assert_eq!(
            order,
            vec![("Drinks", 1), ("Starters", 2), ("Main Courses", 3), ("Desserts", 4)]
        );
    }

    #[test]
    fn test_unknown_drag_type_moves_item() {
        let state = DashboardState::new(demo_dashboard());

        let snapshot = handle_drag_end(
            &state,
            DragEndPayload {
                drag_type: "DEFAULT".to_string(),
                source_group: "Starters".to_string(),
                source_index: 1,
                destination_group: Some("Starters".to_string()),
                destination_index: Some(0),
            },
        );

        assert_eq!(names(&snapshot, "Starters"), vec!["Chicken Wings", "Nachos"]);
    }

    #[test]
    fn test_drop_outside_targets_is_noop() {
        let state = DashboardState::new(demo_dashboard());
        let before = state.snapshot();

        let snapshot = handle_drag_end_json(
            &state,
            r#"{"dragType":"CATEGORY","sourceGroup":"categories","sourceIndex":0,
                "destinationGroup":null,"destinationIndex":null}"#,
        )
        .unwrap();

        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_malformed_body() {
        let state = DashboardState::new(demo_dashboard());

        let err = handle_drag_end_json(&state, r#"{"dragType":"CATEGORY"}"#).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidPayload);
    }
}
