//! # Register Error Type
//!
//! Unified error type for register session operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Till                               │
//! │                                                                     │
//! │  Caller (UI / IPC)            Session Layer                         │
//! │  ─────────────────            ─────────────                         │
//! │                                                                     │
//! │  register.add_to_cart(...)                                          │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │  Session method                                              │  │
//! │  │  Result<T, RegisterError>                                    │  │
//! │  │         │                                                    │  │
//! │  │  Unknown item? ──── NOT_FOUND ────────────┐                  │  │
//! │  │         │                                 ▼                  │  │
//! │  │  Cart rule broken? ─ CartError ──► RegisterError ──► Caller  │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  Every error is recoverable: surfaced as an operator-facing         │
//! │  message, never fatal to the session.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Errors serialize with a machine-readable `code` and a human-readable
//! `message`, so a frontend can branch on the code and display the message.

use serde::Serialize;
use till_core::CartError;

/// Error returned from register session operations.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Insufficient stock for Apples: available 3, requested 5"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for register responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Catalog item or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart rule violation (modes, duplicates, limits)
    CartError,

    /// Requested quantity exceeds stock on hand
    InsufficientStock,

    /// Checkout could not start (e.g. empty cart)
    CheckoutError,

    /// Internal error
    Internal,
}

impl RegisterError {
    /// Creates a new register error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        RegisterError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        RegisterError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        RegisterError::new(ErrorCode::ValidationError, message)
    }
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RegisterError {}

/// Converts cart engine errors to register errors.
impl From<CartError> for RegisterError {
    fn from(err: CartError) -> Self {
        let code = match &err {
            CartError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CartError::LineNotFound { .. } => ErrorCode::NotFound,
            CartError::EmptyCart => ErrorCode::CheckoutError,
            CartError::Validation(_) => ErrorCode::ValidationError,
            CartError::InvalidQuantity { .. }
            | CartError::QuantityTooLarge { .. }
            | CartError::InvalidPrice { .. } => ErrorCode::ValidationError,
            CartError::NotWeighable { .. }
            | CartError::AlreadyWeighed { .. }
            | CartError::DuplicateLine { .. }
            | CartError::InvalidOperation { .. }
            | CartError::CartTooLarge { .. } => ErrorCode::CartError,
        };
        RegisterError::new(code, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
