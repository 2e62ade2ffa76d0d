//! # Error Types
//!
//! Domain-specific error types for beachbar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  beachbar-core errors (this file)                                      │
//! │  ├── CoreError        - Why a store operation had no effect            │
//! │  └── ValidationError  - Input presence / coercion failures             │
//! │                                                                         │
//! │  Host errors (apps/dashboard)                                          │
//! │  ├── ConfigError      - Config file / env loading                      │
//! │  └── ApiError         - What the rendering layer sees (serialized)     │
//! │                                                                         │
//! │  Store ops never raise: CoreError travels inside Outcome::Ignored      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Silent No-Ops
//! Every store operation either applies or leaves state untouched. The
//! [`Outcome`] it returns carries the reason in the second case so the host
//! can log it, but callers are free to drop it.

use thiserror::Error;

use crate::types::{CategoryId, OrderId};

// =============================================================================
// Core Error
// =============================================================================

/// Reasons a dashboard operation left state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No order carries this id.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// No category carries this id.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// No menu group is keyed by this category name.
    #[error("Menu group not found: {0}")]
    GroupNotFound(String),

    /// The group exists but holds no item with this id.
    #[error("Menu item {item_id} not found in group {group}")]
    MenuItemNotFound { group: String, item_id: String },

    /// A drag started from a position that does not exist.
    #[error("Index {index} is out of range for a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The drag was dropped outside any valid target.
    #[error("Drag was cancelled")]
    DragCancelled,

    /// Input failed a presence check or could not be coerced.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only presence checks and the coercions of the menu item form live here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value could not be coerced (e.g. price "abc").
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Outcome
// =============================================================================

/// Result of a state-changing operation.
///
/// ```text
/// store.add("Snacks")  ──► Applied
/// store.add("   ")     ──► Ignored(Validation(Required { field: "name" }))
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed.
    Applied,
    /// State is exactly as before.
    Ignored(CoreError),
}

impl Outcome {
    /// Returns true if the operation changed state.
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// The reason the operation had no effect, if any.
    pub fn ignored_reason(&self) -> Option<&CoreError> {
        match self {
            Outcome::Applied => None,
            Outcome::Ignored(reason) => Some(reason),
        }
    }
}

impl From<CoreResult<()>> for Outcome {
    fn from(result: CoreResult<()>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(reason) => Outcome::Ignored(reason),
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
    fn test_error_messages() {
        let err = CoreError::MenuItemNotFound {
            group: "Drinks".to_string(),
            item_id: "item-5".to_string(),
        };
        assert_eq!(err.to_string(), "Menu item item-5 not found in group Drinks");

        let err = CoreError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Index 7 is out of range for a list of 3");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_outcome_from_result() {
        assert!(Outcome::from(Ok(())).is_applied());

        let outcome = Outcome::from(Err(CoreError::OrderNotFound(99)));
        assert!(!outcome.is_applied());
        assert_eq!(outcome.ignored_reason(), Some(&CoreError::OrderNotFound(99)));
    }
}
