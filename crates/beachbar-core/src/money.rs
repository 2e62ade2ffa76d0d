//! # Money Module
//!
//! Provides the `Money` type for menu prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    8.99 + 7.99 = 16.980000000000000426  ❌                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    899 + 799 = 1698 cents, always exact                                 │
//! │                                                                         │
//! │  Prices arrive as form text ("8.99") and are parsed straight into      │
//! │  cents. No f64 ever touches a price.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use beachbar_core::money::Money;
//!
//! let mojito: Money = "7.99".parse().unwrap();
//! assert_eq!(mojito.cents(), 799);
//! assert_eq!(mojito.to_string(), "$7.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: parsing accepts a sign so the price check can report
///   negative input instead of a format error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as cents**: the rendering layer formats for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use beachbar_core::money::Money;
    ///
    /// let price = Money::from_cents(899); // Represents $8.99
    /// assert_eq!(price.cents(), 899);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use beachbar_core::money::Money;
    ///
    /// let price = Money::from_major_minor(14, 99);
    /// assert_eq!(price.cents(), 1499);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn invalid_price(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    }
}

/// Parses decimal text such as `"8.99"`, `"12"`, `".5"` or `"-3.25"`.
///
/// Digits past the cent are rounded half-up: `"2.345"` is 235 cents.
/// Surrounding whitespace is ignored; anything else that is not a plain
/// decimal number is rejected.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (major.is_empty() && minor.is_empty()) || !all_digits(major) || !all_digits(minor) {
            return Err(invalid_price("expected a decimal number such as 8.99"));
        }

        let major_value: i64 = if major.is_empty() {
            0
        } else {
            major
                .parse()
                .map_err(|_| invalid_price("amount is too large"))?
        };

        let mut minor_digits = minor.bytes().map(|b| i64::from(b - b'0'));
        let tenths = minor_digits.next().unwrap_or(0);
        let hundredths = minor_digits.next().unwrap_or(0);
        let round_up = minor_digits.next().is_some_and(|d| d >= 5);

        let cents = major_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(|| invalid_price("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. The host formats prices for display with
/// the configured currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
