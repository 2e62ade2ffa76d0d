//! # Validation Module
//!
//! Presence checks and form coercions for the dashboard.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rendering layer                                              │
//! │  └── Disables buttons while inputs are empty                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Stores (THIS MODULE)                                         │
//! │  ├── Presence checks (blank → required)                                │
//! │  └── Text → typed coercions (price, category id)                       │
//! │                                                                         │
//! │  A failed check never raises: the store returns Outcome::Ignored       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use beachbar_core::validation::{parse_price, validate_required};
//!
//! assert_eq!(validate_required("name", "  Nachos ").unwrap(), "Nachos");
//! assert_eq!(parse_price("8.99").unwrap().cents(), 899);
//! assert!(parse_price("-1").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CategoryId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a field is present, returning the trimmed value.
///
/// Whitespace-only input counts as missing.
pub fn validate_required<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Validates a new category name.
///
/// ## Example
/// ```rust
/// use beachbar_core::validation::validate_category_name;
///
/// assert_eq!(validate_category_name(" Snacks ").unwrap(), "Snacks");
/// assert!(validate_category_name("   ").is_err());
/// ```
pub fn validate_category_name(name: &str) -> ValidationResult<&str> {
    validate_required("name", name)
}

/// Trims list entries (modifiers, order lines) and drops the blank ones.
///
/// The item form appends an empty input for every "Add Choice" click, so
/// blank entries are expected and silently discarded.
pub fn clean_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Coercions
// =============================================================================

/// Parses a menu price from form text.
///
/// ## Rules
/// - Must be present
/// - Must be a plain decimal number (see [`Money`]'s `FromStr`)
/// - Must be non-negative; zero is allowed (free items)
pub fn parse_price(text: &str) -> ValidationResult<Money> {
    let price: Money = validate_required("price", text)?.parse()?;

    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(price)
}

/// Parses a category id selected in the item form.
pub fn parse_category_id(text: &str) -> ValidationResult<CategoryId> {
    validate_required("category", text)?
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "category".to_string(),
            reason: "must be a category id".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("name", "Mojito").unwrap(), "Mojito");
        assert_eq!(validate_required("name", "  Mojito\t").unwrap(), "Mojito");

        let err = validate_required("name", "  ").unwrap_err();
        assert_eq!(err.to_string(), "name is required");
        assert!(validate_required("name", "").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("8.99").unwrap().cents(), 899);
        assert_eq!(parse_price("0").unwrap().cents(), 0);

        assert!(matches!(
            parse_price(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_price("cheap"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price("-2.50"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_category_id() {
        assert_eq!(parse_category_id("4").unwrap(), 4);
        assert_eq!(parse_category_id(" 1727692800000 ").unwrap(), 1_727_692_800_000);
        assert!(parse_category_id("").is_err());
        assert!(parse_category_id("Drinks").is_err());
    }

    #[test]
    fn test_clean_entries() {
        let raw = vec![
            " Small ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "Large".to_string(),
        ];
        assert_eq!(clean_entries(&raw), vec!["Small", "Large"]);
    }
}
