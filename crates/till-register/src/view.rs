//! # Views
//!
//! Serializable views over the cart and completed sales, shaped for a
//! frontend or IPC caller.
//!
//! ## What a Caller Sees
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  CART                                               2 lines        │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │  Apples                  x3                $8.97                    │
//! │  Minced Beef             2.503 kg          $25.00                   │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │  TOTAL                                     $33.97                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Views are plain-data DTOs: all cents/grams as integers, camelCase field
//! names, no domain behavior.

use serde::{Deserialize, Serialize};

use till_core::{Cart, CartLine, LinePricing, Sale, SaleLine};

/// One cart or receipt line, flattened for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    pub item_id: String,
    pub name: String,

    /// "quantity" or "weighed".
    pub mode: String,

    /// Displayed quantity (1 for weighed lines).
    pub quantity: i64,

    /// Unit price in cents (per piece, or per kg for weighed lines).
    pub unit_price_cents: i64,

    /// Operator-entered total in cents; only set for weighed lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entered_total_cents: Option<i64>,

    /// Derived weight in grams; only set for weighed lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_weight_grams: Option<i64>,

    pub line_total_cents: i64,
}

impl LineView {
    fn from_parts(
        item_id: &str,
        name: &str,
        unit_price_cents: i64,
        pricing: &LinePricing,
        line_total_cents: i64,
    ) -> Self {
        let (mode, quantity, entered_total_cents, derived_weight_grams) = match pricing {
            LinePricing::Quantity { quantity } => ("quantity", *quantity, None, None),
            LinePricing::Weighed {
                entered_total,
                derived_weight,
            } => (
                "weighed",
                1,
                Some(entered_total.cents()),
                Some(derived_weight.grams()),
            ),
        };

        LineView {
            item_id: item_id.to_string(),
            name: name.to_string(),
            mode: mode.to_string(),
            quantity,
            unit_price_cents,
            entered_total_cents,
            derived_weight_grams,
            line_total_cents,
        }
    }
}

impl From<&CartLine> for LineView {
    fn from(line: &CartLine) -> Self {
        LineView::from_parts(
            &line.item_id,
            &line.name,
            line.unit_price.cents(),
            &line.pricing,
            line.line_total().cents(),
        )
    }
}

impl From<&SaleLine> for LineView {
    fn from(line: &SaleLine) -> Self {
        LineView::from_parts(
            &line.item_id,
            &line.name,
            line.unit_price.cents(),
            &line.pricing,
            line.line_total.cents(),
        )
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total().cents(),
        }
    }
}

/// Full cart view: lines plus totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<LineView>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            lines: cart.lines().iter().map(LineView::from).collect(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Receipt for a completed sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub sale_id: String,
    /// RFC 3339 completion timestamp.
    pub timestamp: String,
    pub lines: Vec<LineView>,
    pub total_cents: i64,
}

impl From<&Sale> for Receipt {
    fn from(sale: &Sale) -> Self {
        Receipt {
            sale_id: sale.id.clone(),
            timestamp: sale.completed_at.to_rfc3339(),
            lines: sale.lines.iter().map(LineView::from).collect(),
            total_cents: sale.total.cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::{CatalogItem, Money};

    fn populated_cart() -> Cart {
        let apples = CatalogItem::counted("a", "Apples", "Produce", Money::from_cents(299), 150);
        let mince = CatalogItem::weighed("m", "Minced Beef", "Meat", Money::from_cents(999), 50_000);

        let mut cart = Cart::new();
        cart.add_quantity_item(&apples, 3).unwrap();
        cart.add_weighed_item(&mince, Money::from_cents(2500)).unwrap();
        cart
    }

    #[test]
    fn test_cart_view_shapes_lines() {
        let view = CartView::from(&populated_cart());

        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.totals.total_cents, 3397);

        let counted = &view.lines[0];
        assert_eq!(counted.mode, "quantity");
        assert_eq!(counted.quantity, 3);
        assert_eq!(counted.line_total_cents, 897);
        assert!(counted.derived_weight_grams.is_none());

        let weighed = &view.lines[1];
        assert_eq!(weighed.mode, "weighed");
        assert_eq!(weighed.entered_total_cents, Some(2500));
        assert_eq!(weighed.derived_weight_grams, Some(2503));
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = CartView::from(&populated_cart());
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"lineTotalCents\""));
        assert!(json.contains("\"totalQuantity\""));
        // quantity lines omit weighed-only fields entirely
        assert!(!json.contains("\"enteredTotalCents\":null"));
    }
}
