//! # till-core: Pure Business Logic for Till
//!
//! This crate is the **heart** of Till, a point-of-sale cart pricing and
//! checkout engine. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Till Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 till-register (session layer)               │   │
//! │  │   search ──► add_to_cart ──► update_line ──► checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                    │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐          │   │
//! │  │  │ catalog │ │  money  │ │  cart   │ │ checkout │          │   │
//! │  │  │ Catalog │ │  Money  │ │  Cart   │ │   Sale   │          │   │
//! │  │  │  Item   │ │ Weight  │ │ CartLine│ │ Inventory│          │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘          │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │           Collaborator adapters (till-register)             │   │
//! │  │         StockLedger (Inventory), SaleLog (SaleSink)         │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money and Weight types with integer arithmetic (no floats!)
//! - [`types`] - Domain types (CatalogItem, CartLine, Sale, etc.)
//! - [`catalog`] - Read-only searchable item catalog
//! - [`cart`] - The cart engine: line invariants and totals
//! - [`checkout`] - Finalizing a cart into an immutable sale
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64), weights in grams
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::money::Money;
//! use till_core::cart::Cart;
//! use till_core::types::CatalogItem;
//!
//! // A counted item at $2.99 with 150 on hand
//! let apples = CatalogItem::counted("apple-01", "Apples", "Produce", Money::from_cents(299), 150);
//!
//! let mut cart = Cart::new();
//! cart.add_quantity_item(&apples, 3).unwrap();
//!
//! assert_eq!(cart.total().cents(), 897); // $8.97
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Money` instead of
// `use till_core::money::Money`

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::{checkout, CheckoutOutcome, Inventory, InventoryError, SaleSink, SaleSinkError};
pub use error::{CartError, CartResult, ValidationError};
pub use money::{Money, Weight};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
/// Can be made configurable per-store in future versions.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single quantity-mode line, enforced by the cart
/// engine on adds, increments, and updates (stock-exempt items included).
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10),
/// and bounds line totals well inside i64 range.
pub const MAX_LINE_QUANTITY: i64 = 999;
