//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  till-core errors (this file)                                       │
//! │  ├── CartError        - Cart engine and checkout failures           │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  till-register errors (separate crate)                              │
//! │  └── RegisterError    - What the session caller sees (serialized)   │
//! │                                                                     │
//! │  Flow: ValidationError → CartError → RegisterError → Caller         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, stock levels, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//! 5. Every error is recoverable by the caller; none is fatal

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart engine and checkout errors.
///
/// These errors represent business rule violations raised synchronously by
/// the cart engine. They should be caught and translated to user-friendly
/// messages; none is retried automatically.
#[derive(Debug, Error)]
pub enum CartError {
    /// Caller supplied a non-positive quantity.
    #[error("Invalid quantity: {quantity} (must be positive)")]
    InvalidQuantity { quantity: i64 },

    /// Caller supplied a quantity above the per-line cap.
    ///
    /// Enforced by the cart engine itself so that line totals stay well
    /// inside i64 range regardless of the caller.
    #[error("Quantity {quantity} exceeds the per-line maximum of {max}")]
    QuantityTooLarge { quantity: i64, max: i64 },

    /// Caller supplied a non-positive entered price for a weighed line.
    #[error("Invalid price: {cents} cents (must be positive)")]
    InvalidPrice { cents: i64 },

    /// Requested quantity exceeds stock on hand at validation time.
    ///
    /// ## When This Occurs
    /// - Initial add of a counted item beyond available stock
    /// - Explicit quantity update beyond available stock
    ///
    /// Stock is NOT re-checked at checkout; a stale-stock race between
    /// validation and checkout is accepted (single-actor model).
    #[error("Insufficient stock for {item}: available {available}, requested {requested}")]
    InsufficientStock {
        item: String,
        available: i64,
        requested: i64,
    },

    /// Weighed-mode add attempted on an item not sold by weight.
    #[error("{item} is not sold by weight")]
    NotWeighable { item: String },

    /// Quantity-mode add attempted on an item already carted in weighed
    /// mode. The line must be removed and re-added; modes never convert
    /// in place.
    #[error("{item} is already in the cart as a weighed line; remove it first")]
    AlreadyWeighed { item: String },

    /// Weighed-mode add attempted for an item that already has a line
    /// (in either mode).
    #[error("{item} is already in the cart; remove it before re-weighing")]
    DuplicateLine { item: String },

    /// Operation does not apply to the line's mode
    /// (e.g. quantity update on a weighed line).
    #[error("Invalid operation on {item}: {reason}")]
    InvalidOperation { item: String, reason: String },

    /// Operation referenced a line that does not exist.
    /// (`remove_line` is the exception: it is idempotent and never fails.)
    #[error("No cart line for item: {item}")]
    LineNotFound { item: String },

    /// Checkout attempted with no lines.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before the cart engine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., bad item id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
