//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Dashboard                          │
//! │                                                                         │
//! │  Rendering layer             Host                                       │
//! │  ───────────────             ────                                       │
//! │                                                                         │
//! │  updateOrderStatus(4, "served")                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │         │                                                        │  │
//! │  │  Unparseable argument? ── ValidationError ──► ApiError ─────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store call ── Outcome::Ignored? ── debug! log, no error ──┐     │  │
//! │  │         │                                                  │     │  │
//! │  │         ▼                                                  ▼     │  │
//! │  │  Updated snapshot ─────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain no-ops are never errors. Only arguments that cannot be turned into
//! domain types, malformed drag payloads, and a config file that fails to
//! reload come back as `ApiError`.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use beachbar_core::ValidationError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "status must be one of: [\"new\", \"preparing\", \"ready\", \"completed\"]"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// An argument could not be parsed into a domain value
    ValidationError,

    /// A JSON payload was malformed
    InvalidPayload,

    /// Configuration could not be loaded
    ConfigError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(ErrorCode::InvalidPayload, format!("Malformed payload: {}", err))
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Error
// =============================================================================

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failures while loading `dashboard.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this config.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but make no sense.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
