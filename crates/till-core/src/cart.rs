//! # Cart Engine
//!
//! Maintains the cart invariant set and computes totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Machine                               │
//! │                                                                     │
//! │        add_quantity_item / add_weighed_item                         │
//! │  ┌─────────┐ ───────────────────────────────► ┌───────────┐        │
//! │  │  Empty  │                                  │ Populated │        │
//! │  └─────────┘ ◄─────────────────────────────── └───────────┘        │
//! │        checkout success / clear                                     │
//! │                                                                     │
//! │  No terminal state; the cart is reusable across sessions.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per catalog item id
//! - Insertion order = display order
//! - Counted lines never exceed stock on hand over any sequence of adds
//!   (initial over-add rejects, increments silently clamp)
//! - No quantity line ever exceeds [`MAX_LINE_QUANTITY`](crate::MAX_LINE_QUANTITY),
//!   stock-exempt items included, so line totals stay inside i64 range
//! - A line never converts between quantity and weighed mode in place;
//!   it must be removed and re-added
//! - Maximum lines: [`MAX_CART_LINES`](crate::MAX_CART_LINES)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::money::{Money, Weight};
use crate::types::{CartLine, CatalogItem, LinePricing};
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

/// The shopping cart: an ordered sequence of lines.
///
/// Modeled as an explicit value object owned by a single session, never as
/// ambient/global state. All mutation happens through the methods below and
/// runs to completion before returning (single-actor model).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a counted item to the cart, or increases an existing line.
    ///
    /// ## Behavior
    /// - Rejects with `QuantityTooLarge` above
    ///   [`MAX_LINE_QUANTITY`](crate::MAX_LINE_QUANTITY); the cap is
    ///   enforced here, not just at the session edge, so line totals stay
    ///   inside i64 range
    /// - New line: rejects with `InsufficientStock` if `quantity` exceeds
    ///   stock on hand (stock-exempt weighed items excepted)
    /// - Existing quantity line: increases quantity, silently clamped to
    ///   stock on hand and to the per-line cap; never fails on clamp
    /// - Existing weighed line: fails with `AlreadyWeighed` (remove first)
    ///
    /// The clamp-on-increment / reject-on-add split mirrors the observed
    /// register behavior; see DESIGN.md for the policy decision.
    pub fn add_quantity_item(&mut self, item: &CatalogItem, quantity: i64) -> CartResult<()> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            return match line.pricing {
                LinePricing::Weighed { .. } => Err(CartError::AlreadyWeighed {
                    item: item.name.clone(),
                }),
                LinePricing::Quantity { quantity: current } => {
                    // Both operands are <= MAX_LINE_QUANTITY here, so the
                    // sum cannot overflow before the clamp.
                    let mut new_quantity = (current + quantity).min(MAX_LINE_QUANTITY);
                    if !item.stock_exempt() {
                        new_quantity = new_quantity.min(item.stock_on_hand);
                    }
                    line.pricing = LinePricing::Quantity {
                        quantity: new_quantity,
                    };
                    Ok(())
                }
            };
        }

        if !item.can_sell(quantity) {
            return Err(CartError::InsufficientStock {
                item: item.name.clone(),
                available: item.stock_on_hand,
                requested: quantity,
            });
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CartError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            pricing: LinePricing::Quantity { quantity },
            added_at: Utc::now(),
        });
        Ok(())
    }

    /// Adds a weighed item priced by total-price entry.
    ///
    /// ## Behavior
    /// - Fails with `NotWeighable` if the item is not sold by weight
    /// - Fails with `InvalidPrice` if the entered total is not positive
    /// - Fails with `DuplicateLine` if the item already has a line
    ///   in either mode (remove first)
    /// - Derives the weight from the per-kilogram unit price and freezes it
    ///   on the line
    pub fn add_weighed_item(&mut self, item: &CatalogItem, entered_total: Money) -> CartResult<()> {
        if !item.sold_by_weight {
            return Err(CartError::NotWeighable {
                item: item.name.clone(),
            });
        }

        if !entered_total.is_positive() {
            return Err(CartError::InvalidPrice {
                cents: entered_total.cents(),
            });
        }

        if self.lines.iter().any(|l| l.item_id == item.id) {
            return Err(CartError::DuplicateLine {
                item: item.name.clone(),
            });
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CartError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        let derived_weight = Weight::from_price(entered_total, item.unit_price);

        self.lines.push(CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            pricing: LinePricing::Weighed {
                entered_total,
                derived_weight,
            },
            added_at: Utc::now(),
        });
        Ok(())
    }

    /// Sets the quantity of an existing counted line.
    ///
    /// ## Behavior
    /// - Fails with `LineNotFound` if no line exists for the item
    /// - Fails with `InvalidOperation` on a weighed line (not adjustable)
    /// - Quantity <= 0 removes the line (same as `remove_line`)
    /// - Fails with `QuantityTooLarge` above
    ///   [`MAX_LINE_QUANTITY`](crate::MAX_LINE_QUANTITY)
    /// - Fails with `InsufficientStock` if the new quantity exceeds stock
    ///   on hand (rejects rather than clamps; explicit input is never
    ///   silently altered)
    pub fn update_quantity(&mut self, item: &CatalogItem, new_quantity: i64) -> CartResult<()> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.item_id == item.id)
            .ok_or_else(|| CartError::LineNotFound {
                item: item.id.clone(),
            })?;

        if line.pricing.is_weighed() {
            return Err(CartError::InvalidOperation {
                item: item.name.clone(),
                reason: "weighed lines are not quantity-adjustable".to_string(),
            });
        }

        if new_quantity <= 0 {
            self.remove_line(&item.id);
            return Ok(());
        }

        if new_quantity > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                quantity: new_quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        if !item.can_sell(new_quantity) {
            return Err(CartError::InsufficientStock {
                item: item.name.clone(),
                available: item.stock_on_hand,
                requested: new_quantity,
            });
        }

        line.pricing = LinePricing::Quantity {
            quantity: new_quantity,
        };
        Ok(())
    }

    /// Removes the line for an item, if present.
    ///
    /// Idempotent: removing a missing line is a no-op, never an error.
    pub fn remove_line(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Calculates the cart total: the sum of all line totals,
    /// exactly zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Lines in insertion (display) order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for an item id.
    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }

    /// Number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total displayed quantity across all lines
    /// (weighed lines count as 1).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.pricing.display_quantity()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(id: &str, cents: i64, stock: i64) -> CatalogItem {
        CatalogItem::counted(id, format!("Item {}", id), "Grocery", Money::from_cents(cents), stock)
    }

    fn weighed(id: &str, per_kilo_cents: i64) -> CatalogItem {
        CatalogItem::weighed(
            id,
            format!("Item {}", id),
            "Meat",
            Money::from_cents(per_kilo_cents),
            50_000,
        )
    }

    #[test]
    fn test_add_counted_item() {
        let mut cart = Cart::new();
        let item = counted("a", 299, 150);

        cart.add_quantity_item(&item, 3).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line("a").unwrap().line_total().cents(), 897);
        assert_eq!(cart.total().cents(), 897);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let item = counted("a", 299, 150);

        assert!(matches!(
            cart.add_quantity_item(&item, 0),
            Err(CartError::InvalidQuantity { quantity: 0 })
        ));
        assert!(matches!(
            cart.add_quantity_item(&item, -2),
            Err(CartError::InvalidQuantity { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_initial_add_rejects_over_stock() {
        let mut cart = Cart::new();
        let item = counted("b", 100, 5);

        let err = cart.add_quantity_item(&item, 10).unwrap_err();
        assert!(matches!(
            err,
            CartError::InsufficientStock {
                available: 5,
                requested: 10,
                ..
            }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_clamps_to_stock() {
        let mut cart = Cart::new();
        let item = counted("b", 100, 5);

        cart.add_quantity_item(&item, 3).unwrap();
        // 3 + 10 would exceed stock; increment silently caps at 5
        cart.add_quantity_item(&item, 10).unwrap();

        let line = cart.line("b").unwrap();
        assert_eq!(line.pricing.display_quantity(), 5);
        assert_eq!(line.line_total().cents(), 500);
    }

    #[test]
    fn test_quantity_never_exceeds_stock_over_any_add_sequence() {
        let mut cart = Cart::new();
        let item = counted("b", 100, 7);

        cart.add_quantity_item(&item, 2).unwrap();
        for _ in 0..20 {
            cart.add_quantity_item(&item, 3).unwrap();
        }

        assert_eq!(cart.line("b").unwrap().pricing.display_quantity(), 7);
    }

    #[test]
    fn test_weighed_items_are_stock_exempt_in_quantity_mode() {
        let mut cart = Cart::new();
        // stock is tracked in grams (only 500 here); piece-count adds
        // are exempt from the stock check
        let meat = CatalogItem::weighed("m", "Item m", "Meat", Money::from_cents(999), 500);

        cart.add_quantity_item(&meat, 600).unwrap();
        assert_eq!(cart.line("m").unwrap().pricing.display_quantity(), 600);
    }

    #[test]
    fn test_add_rejects_quantity_over_line_cap() {
        let mut cart = Cart::new();
        let item = counted("a", 299, i64::MAX);
        let meat = weighed("m", 999);

        assert!(matches!(
            cart.add_quantity_item(&item, MAX_LINE_QUANTITY + 1),
            Err(CartError::QuantityTooLarge { .. })
        ));

        // stock-exempt items hit the same cap; a huge quantity can never
        // reach total() and overflow the line math
        assert!(matches!(
            cart.add_quantity_item(&meat, i64::MAX / 100),
            Err(CartError::QuantityTooLarge { .. })
        ));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_increment_clamps_to_line_cap() {
        let mut cart = Cart::new();
        let item = counted("a", 100, 5000);

        cart.add_quantity_item(&item, MAX_LINE_QUANTITY).unwrap();
        // stock would allow more; the per-line cap wins
        cart.add_quantity_item(&item, MAX_LINE_QUANTITY).unwrap();
        assert_eq!(
            cart.line("a").unwrap().pricing.display_quantity(),
            MAX_LINE_QUANTITY
        );

        // stock-exempt items clamp at the cap too
        let meat = weighed("m", 999);
        cart.add_quantity_item(&meat, 600).unwrap();
        cart.add_quantity_item(&meat, 600).unwrap();
        assert_eq!(
            cart.line("m").unwrap().pricing.display_quantity(),
            MAX_LINE_QUANTITY
        );
    }

    #[test]
    fn test_update_quantity_rejects_over_line_cap() {
        let mut cart = Cart::new();
        let item = counted("a", 100, 5000);

        cart.add_quantity_item(&item, 2).unwrap();
        assert!(matches!(
            cart.update_quantity(&item, MAX_LINE_QUANTITY + 1),
            Err(CartError::QuantityTooLarge { .. })
        ));
        assert_eq!(cart.line("a").unwrap().pricing.display_quantity(), 2);
    }

    #[test]
    fn test_add_weighed_item() {
        let mut cart = Cart::new();
        let meat = weighed("m", 999);

        cart.add_weighed_item(&meat, Money::from_cents(2500)).unwrap();

        let line = cart.line("m").unwrap();
        assert_eq!(line.line_total().cents(), 2500);
        match line.pricing {
            LinePricing::Weighed { derived_weight, .. } => {
                assert_eq!(derived_weight.grams(), 2503)
            }
            LinePricing::Quantity { .. } => panic!("expected weighed pricing"),
        }
    }

    #[test]
    fn test_add_weighed_rejects_counted_item() {
        let mut cart = Cart::new();
        let item = counted("a", 299, 150);

        assert!(matches!(
            cart.add_weighed_item(&item, Money::from_cents(500)),
            Err(CartError::NotWeighable { .. })
        ));
    }

    #[test]
    fn test_add_weighed_rejects_non_positive_price() {
        let mut cart = Cart::new();
        let meat = weighed("m", 999);

        assert!(matches!(
            cart.add_weighed_item(&meat, Money::zero()),
            Err(CartError::InvalidPrice { cents: 0 })
        ));
    }

    #[test]
    fn test_add_weighed_rejects_duplicate_either_mode() {
        let mut cart = Cart::new();
        let meat = weighed("m", 999);

        cart.add_weighed_item(&meat, Money::from_cents(2500)).unwrap();
        assert!(matches!(
            cart.add_weighed_item(&meat, Money::from_cents(1000)),
            Err(CartError::DuplicateLine { .. })
        ));

        // quantity line also blocks a weighed add
        let mut cart = Cart::new();
        cart.add_quantity_item(&meat, 1).unwrap();
        assert!(matches!(
            cart.add_weighed_item(&meat, Money::from_cents(1000)),
            Err(CartError::DuplicateLine { .. })
        ));
    }

    #[test]
    fn test_quantity_add_on_weighed_line_fails() {
        let mut cart = Cart::new();
        let meat = weighed("m", 999);

        cart.add_weighed_item(&meat, Money::from_cents(2500)).unwrap();
        assert!(matches!(
            cart.add_quantity_item(&meat, 1),
            Err(CartError::AlreadyWeighed { .. })
        ));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        let item = counted("a", 299, 10);

        cart.add_quantity_item(&item, 2).unwrap();
        cart.update_quantity(&item, 7).unwrap();
        assert_eq!(cart.line("a").unwrap().pricing.display_quantity(), 7);

        // beyond stock rejects, does not clamp
        assert!(matches!(
            cart.update_quantity(&item, 11),
            Err(CartError::InsufficientStock { .. })
        ));
        assert_eq!(cart.line("a").unwrap().pricing.display_quantity(), 7);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let item = counted("a", 299, 10);

        cart.add_quantity_item(&item, 2).unwrap();
        cart.update_quantity(&item, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_missing_line() {
        let mut cart = Cart::new();
        let item = counted("a", 299, 10);

        assert!(matches!(
            cart.update_quantity(&item, 2),
            Err(CartError::LineNotFound { .. })
        ));
    }

    #[test]
    fn test_update_quantity_on_weighed_line_is_invalid() {
        let mut cart = Cart::new();
        let meat = weighed("m", 999);

        cart.add_weighed_item(&meat, Money::from_cents(2500)).unwrap();
        assert!(matches!(
            cart.update_quantity(&meat, 2),
            Err(CartError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_remove_line_is_idempotent() {
        let mut cart = Cart::new();
        let item = counted("a", 299, 10);

        cart.add_quantity_item(&item, 2).unwrap();
        cart.remove_line("a");
        assert!(cart.is_empty());

        // second removal is a no-op, not an error
        cart.remove_line("a");
        cart.remove_line("never-added");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_sums_mixed_lines() {
        let mut cart = Cart::new();
        let item = counted("a", 299, 150);
        let meat = weighed("m", 999);

        cart.add_quantity_item(&item, 3).unwrap();
        cart.add_weighed_item(&meat, Money::from_cents(2500)).unwrap();

        assert_eq!(cart.total().cents(), 897 + 2500);
        assert_eq!(cart.total_quantity(), 4); // 3 pieces + 1 weighed line
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        let a = counted("a", 100, 10);
        let b = counted("b", 200, 10);
        let c = counted("c", 300, 10);

        cart.add_quantity_item(&b, 1).unwrap();
        cart.add_quantity_item(&a, 1).unwrap();
        cart.add_quantity_item(&c, 1).unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_cart_capacity_guard() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            let item = counted(&format!("i{}", i), 100, 10);
            cart.add_quantity_item(&item, 1).unwrap();
        }

        let overflow = counted("overflow", 100, 10);
        assert!(matches!(
            cart.add_quantity_item(&overflow, 1),
            Err(CartError::CartTooLarge { .. })
        ));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        let item = counted("a", 299, 150);

        cart.add_quantity_item(&item, 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }
}
