//! # Checkout
//!
//! Finalizes a non-empty cart into an immutable [`Sale`].
//!
//! ## Checkout Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Sequence                               │
//! │                                                                     │
//! │  1. Reject empty carts (EmptyCart)                                  │
//! │  2. Freeze the Sale snapshot ← total captured HERE                  │
//! │  3. Decrement stock, best-effort, one line at a time                │
//! │     (failures collected, never abort the sale)                      │
//! │  4. Clear the cart                                                  │
//! │                                                                     │
//! │  Stock mutation ALWAYS comes after the snapshot, never before:      │
//! │  the price charged must match the snapshot exactly.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Collaborator Contracts
//! The two traits below are the module's only outward boundary. Stock
//! decrement is fire-and-forget: a failed decrement is reported in the
//! [`CheckoutOutcome`] but the already-produced sale stands. No rollback or
//! two-phase commit is defined; a multi-register deployment would need a
//! serialized stock-decrement primitive this module deliberately does not
//! provide.

use thiserror::Error;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CartError, CartResult};
use crate::types::{Sale, SaleLine};

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Inventory collaborator: stock reads and best-effort decrements.
///
/// Implemented outside the core (e.g. `StockLedger` in till-register, or a
/// database-backed store). The cart engine never mutates stock itself.
pub trait Inventory {
    /// Current stock level for an item, in the item's own sale unit.
    /// `None` if the item is unknown to the inventory.
    fn stock_on_hand(&self, item_id: &str) -> Option<i64>;

    /// Decrements stock for an item.
    ///
    /// Called once per sale line after the sale snapshot is captured.
    /// Failure is non-fatal to the sale.
    fn decrement_stock(&mut self, item_id: &str, amount: i64) -> Result<(), InventoryError>;
}

/// Persistence collaborator: accepts completed sales for storage.
///
/// No retry contract is defined by this core; retries, if any, belong to
/// the implementation.
pub trait SaleSink {
    /// Stores a completed sale.
    fn record_sale(&mut self, sale: &Sale) -> Result<(), SaleSinkError>;
}

/// Inventory collaborator failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// The item id is unknown to the inventory.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// The backing store rejected the decrement.
    #[error("Stock update failed for {item}: {reason}")]
    UpdateFailed { item: String, reason: String },
}

/// Persistence collaborator failures.
#[derive(Debug, Clone, Error)]
pub enum SaleSinkError {
    /// The backing store rejected the sale record.
    #[error("Failed to store sale {sale_id}: {reason}")]
    StoreFailed { sale_id: String, reason: String },
}

// =============================================================================
// Checkout
// =============================================================================

/// The result of a successful checkout.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// The immutable sale snapshot.
    pub sale: Sale,

    /// Stock decrements that failed, by item id. The sale stands
    /// regardless; callers log these (fire-and-forget contract).
    pub failed_adjustments: Vec<(String, InventoryError)>,
}

/// Finalizes a cart into a [`Sale`] and clears it.
///
/// ## Behavior
/// - Fails with [`CartError::EmptyCart`] if the cart has no lines; no sale
///   is produced and the cart is untouched
/// - Freezes every line and the current total into a `Sale` with a freshly
///   generated UUID **before** any stock mutation
/// - Signals the inventory collaborator to decrement each counted line by
///   its quantity and each weighed line by its derived weight in grams;
///   failures are collected, never fatal
/// - Clears the cart only after the snapshot is produced
///
/// ## Example
/// ```rust
/// use till_core::cart::Cart;
/// use till_core::checkout::{checkout, Inventory, InventoryError};
/// use till_core::money::Money;
/// use till_core::types::CatalogItem;
///
/// struct NullInventory;
/// impl Inventory for NullInventory {
///     fn stock_on_hand(&self, _: &str) -> Option<i64> { None }
///     fn decrement_stock(&mut self, _: &str, _: i64) -> Result<(), InventoryError> { Ok(()) }
/// }
///
/// let apples = CatalogItem::counted("a", "Apples", "Produce", Money::from_cents(299), 150);
/// let mut cart = Cart::new();
/// cart.add_quantity_item(&apples, 3).unwrap();
///
/// let outcome = checkout(&mut cart, &mut NullInventory).unwrap();
/// assert_eq!(outcome.sale.total.cents(), 897);
/// assert!(cart.is_empty());
/// ```
pub fn checkout(cart: &mut Cart, inventory: &mut dyn Inventory) -> CartResult<CheckoutOutcome> {
    if cart.is_empty() {
        return Err(CartError::EmptyCart);
    }

    // Snapshot first. The total charged is frozen before any stock
    // mutation can observe or affect it.
    let sale = Sale {
        id: Uuid::new_v4().to_string(),
        lines: cart.lines().iter().map(SaleLine::from_cart_line).collect(),
        total: cart.total(),
        completed_at: chrono::Utc::now(),
    };

    let mut failed_adjustments = Vec::new();
    for adjustment in sale.stock_adjustments() {
        if let Err(err) = inventory.decrement_stock(&adjustment.item_id, adjustment.amount) {
            failed_adjustments.push((adjustment.item_id, err));
        }
    }

    cart.clear();

    Ok(CheckoutOutcome {
        sale,
        failed_adjustments,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::CatalogItem;
    use std::collections::HashMap;

    /// Minimal in-memory inventory for exercising the checkout contract.
    struct TestInventory {
        levels: HashMap<String, i64>,
        reject: bool,
    }

    impl TestInventory {
        fn with_levels(levels: &[(&str, i64)]) -> Self {
            TestInventory {
                levels: levels
                    .iter()
                    .map(|(id, n)| (id.to_string(), *n))
                    .collect(),
                reject: false,
            }
        }
    }

    impl Inventory for TestInventory {
        fn stock_on_hand(&self, item_id: &str) -> Option<i64> {
            self.levels.get(item_id).copied()
        }

        fn decrement_stock(&mut self, item_id: &str, amount: i64) -> Result<(), InventoryError> {
            if self.reject {
                return Err(InventoryError::UpdateFailed {
                    item: item_id.to_string(),
                    reason: "store offline".to_string(),
                });
            }
            match self.levels.get_mut(item_id) {
                Some(level) => {
                    *level -= amount;
                    Ok(())
                }
                None => Err(InventoryError::UnknownItem(item_id.to_string())),
            }
        }
    }

    fn apples() -> CatalogItem {
        CatalogItem::counted("a", "Apples", "Produce", Money::from_cents(299), 150)
    }

    fn mince() -> CatalogItem {
        CatalogItem::weighed("m", "Minced Beef", "Meat", Money::from_cents(999), 50_000)
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let mut cart = Cart::new();
        let mut inventory = TestInventory::with_levels(&[]);

        assert!(matches!(
            checkout(&mut cart, &mut inventory),
            Err(CartError::EmptyCart)
        ));
    }

    #[test]
    fn test_checkout_snapshots_total_and_clears_cart() {
        let mut cart = Cart::new();
        let mut inventory = TestInventory::with_levels(&[("a", 150), ("m", 50_000)]);

        cart.add_quantity_item(&apples(), 3).unwrap();
        cart.add_weighed_item(&mince(), Money::from_cents(2500)).unwrap();
        let expected_total = cart.total();

        let outcome = checkout(&mut cart, &mut inventory).unwrap();

        assert_eq!(outcome.sale.total, expected_total);
        assert_eq!(outcome.sale.total.cents(), 3397);
        assert_eq!(outcome.sale.lines.len(), 2);
        assert!(outcome.failed_adjustments.is_empty());
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_checkout_decrements_stock_per_mode() {
        let mut cart = Cart::new();
        let mut inventory = TestInventory::with_levels(&[("a", 150), ("m", 50_000)]);

        cart.add_quantity_item(&apples(), 3).unwrap();
        cart.add_weighed_item(&mince(), Money::from_cents(2500)).unwrap();

        checkout(&mut cart, &mut inventory).unwrap();

        // counted line: -3 pieces; weighed line: -2503 grams
        assert_eq!(inventory.stock_on_hand("a"), Some(147));
        assert_eq!(inventory.stock_on_hand("m"), Some(50_000 - 2503));
    }

    #[test]
    fn test_checkout_sale_ids_are_unique() {
        let mut inventory = TestInventory::with_levels(&[("a", 150)]);

        let mut cart = Cart::new();
        cart.add_quantity_item(&apples(), 1).unwrap();
        let first = checkout(&mut cart, &mut inventory).unwrap();

        cart.add_quantity_item(&apples(), 1).unwrap();
        let second = checkout(&mut cart, &mut inventory).unwrap();

        assert_ne!(first.sale.id, second.sale.id);
    }

    #[test]
    fn test_decrement_failure_is_not_fatal() {
        let mut cart = Cart::new();
        let mut inventory = TestInventory::with_levels(&[("a", 150)]);
        inventory.reject = true;

        cart.add_quantity_item(&apples(), 2).unwrap();
        let outcome = checkout(&mut cart, &mut inventory).unwrap();

        // sale produced and cart cleared despite the failed decrement
        assert_eq!(outcome.sale.total.cents(), 598);
        assert_eq!(outcome.failed_adjustments.len(), 1);
        assert_eq!(outcome.failed_adjustments[0].0, "a");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_item_decrement_reported() {
        let mut cart = Cart::new();
        // inventory has no entry for "a"
        let mut inventory = TestInventory::with_levels(&[]);

        cart.add_quantity_item(&apples(), 2).unwrap();
        let outcome = checkout(&mut cart, &mut inventory).unwrap();

        assert_eq!(
            outcome.failed_adjustments[0].1,
            InventoryError::UnknownItem("a".to_string())
        );
    }

    #[test]
    fn test_cart_is_reusable_after_checkout() {
        let mut cart = Cart::new();
        let mut inventory = TestInventory::with_levels(&[("a", 150)]);

        cart.add_quantity_item(&apples(), 1).unwrap();
        checkout(&mut cart, &mut inventory).unwrap();

        // Empty -> Populated -> Empty cycle repeats
        cart.add_quantity_item(&apples(), 4).unwrap();
        assert_eq!(cart.total().cents(), 4 * 299);
    }
}
