//! # Domain Types
//!
//! Core domain types used throughout Till.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │  CatalogItem   │   │    CartLine    │   │      Sale      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id            │──►│  item_id       │──►│  id (UUID)     │      │
//! │  │  name          │   │  name (frozen) │   │  lines         │      │
//! │  │  unit_price    │   │  unit_price    │   │  total (frozen)│      │
//! │  │  stock_on_hand │   │  pricing       │   │  completed_at  │      │
//! │  │  weighed       │   └────────────────┘   └────────────────┘      │
//! │  └────────────────┘                                                │
//! │                                                                     │
//! │  ┌──────────────────────────────┐   ┌────────────────────────┐     │
//! │  │         LinePricing          │   │    StockAdjustment     │     │
//! │  │  ──────────────────────────  │   │  ────────────────────  │     │
//! │  │  Quantity { quantity }       │   │  item_id               │     │
//! │  │  Weighed  { entered_total,   │   │  amount (count/grams)  │     │
//! │  │             derived_weight } │   └────────────────────────┘     │
//! │  └──────────────────────────────┘                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Semantics
//! A catalog item carries exactly one `unit_price`: price per piece for
//! counted items, price per kilogram for weighed items. A weighed cart line
//! keeps the operator-entered total in its own field (`entered_total`) and
//! the derived weight separately. The two amounts are never overloaded onto
//! one field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::{Money, Weight};

// =============================================================================
// Catalog Item
// =============================================================================

/// A sellable item in the catalog.
///
/// Created and updated by an external inventory collaborator; read-only to
/// the cart engine. Stock mutation happens only through the
/// [`Inventory`](crate::checkout::Inventory) trait at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier.
    pub id: String,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Category label (for catalog filtering).
    pub category: String,

    /// Price per piece, or per kilogram when `sold_by_weight` is set.
    pub unit_price: Money,

    /// Available stock, in the item's own sale unit:
    /// piece count for counted items, grams for weighed items.
    pub stock_on_hand: i64,

    /// True if this item is sold by total-price entry (weight inferred)
    /// rather than by count.
    pub sold_by_weight: bool,
}

impl CatalogItem {
    /// Creates a counted item (sold by piece).
    pub fn counted(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
        stock_on_hand: i64,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            unit_price,
            stock_on_hand,
            sold_by_weight: false,
        }
    }

    /// Creates a weighed item (sold by total-price entry, priced per kg).
    pub fn weighed(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price_per_kilo: Money,
        stock_grams: i64,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            unit_price: price_per_kilo,
            stock_on_hand: stock_grams,
            sold_by_weight: true,
        }
    }

    /// Checks whether `quantity` pieces can be sold against current stock.
    ///
    /// Weighed items are stock-exempt in quantity mode: their stock is
    /// tracked in grams and only decremented by derived weight at checkout.
    pub fn can_sell(&self, quantity: i64) -> bool {
        if self.stock_exempt() {
            return true;
        }
        quantity <= self.stock_on_hand
    }

    /// True if quantity-mode stock checks do not apply to this item.
    #[inline]
    pub fn stock_exempt(&self) -> bool {
        self.sold_by_weight
    }
}

// =============================================================================
// Line Pricing
// =============================================================================

/// How a cart line is priced.
///
/// The two modes are distinct enum variants, so an invalid combination
/// (a quantity on a weighed line, an entered total on a counted line)
/// cannot be represented. A line never converts between modes in place;
/// it must be removed and re-added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LinePricing {
    /// Sold by count: `line total = unit_price × quantity`.
    Quantity { quantity: i64 },

    /// Sold by total-price entry: the operator keys the amount charged and
    /// the weight is derived from the per-kilogram unit price.
    Weighed {
        entered_total: Money,
        derived_weight: Weight,
    },
}

impl LinePricing {
    /// True for weighed-mode pricing.
    #[inline]
    pub const fn is_weighed(&self) -> bool {
        matches!(self, LinePricing::Weighed { .. })
    }

    /// Displayed quantity: the count for counted lines, 1 for weighed lines.
    pub const fn display_quantity(&self) -> i64 {
        match self {
            LinePricing::Quantity { quantity } => *quantity,
            LinePricing::Weighed { .. } => 1,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in a cart, corresponding to exactly one catalog item.
///
/// ## Design Notes
/// - `item_id`: non-owning reference to the catalog item
/// - `name` / `unit_price`: frozen copies taken at add time, so the cart
///   displays consistent data even if the catalog changes afterwards
///   (snapshot pattern)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Id of the referenced catalog item.
    pub item_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    /// Per piece for counted lines, per kilogram for weighed lines.
    pub unit_price: Money,

    /// Pricing mode and its mode-specific values.
    pub pricing: LinePricing,

    /// When this line was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Calculates this line's total.
    pub fn line_total(&self) -> Money {
        match self.pricing {
            LinePricing::Quantity { quantity } => self.unit_price.multiply_quantity(quantity),
            LinePricing::Weighed { entered_total, .. } => entered_total,
        }
    }

    /// The stock decrement this line causes at checkout, in the item's own
    /// sale unit: piece count for counted lines, derived grams for weighed
    /// lines.
    pub fn stock_decrement(&self) -> i64 {
        match self.pricing {
            LinePricing::Quantity { quantity } => quantity,
            LinePricing::Weighed { derived_weight, .. } => derived_weight.grams(),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a completed sale.
/// Snapshot of a [`CartLine`] frozen at the moment of checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub item_id: String,
    /// Item name at time of sale (frozen).
    pub name: String,
    /// Unit price at time of sale (frozen).
    pub unit_price: Money,
    /// Pricing mode and values at time of sale (frozen).
    pub pricing: LinePricing,
    /// Line total at time of sale (frozen).
    pub line_total: Money,
}

impl SaleLine {
    /// Freezes a cart line into a sale line.
    pub fn from_cart_line(line: &CartLine) -> Self {
        SaleLine {
            item_id: line.item_id.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price,
            pricing: line.pricing,
            line_total: line.line_total(),
        }
    }
}

/// A completed sale.
///
/// Created only by a successful checkout; immutable thereafter. Handed to
/// the persistence collaborator ([`SaleSink`](crate::checkout::SaleSink))
/// for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique identifier (UUID v4), generated at checkout time.
    pub id: String,

    /// Snapshot of every cart line at the moment of checkout.
    pub lines: Vec<SaleLine>,

    /// Cart total at the moment of checkout.
    pub total: Money,

    /// When the sale was completed.
    pub completed_at: DateTime<Utc>,
}

impl Sale {
    /// The stock decrements this sale implies, one per line:
    /// quantity for counted lines, derived grams for weighed lines.
    pub fn stock_adjustments(&self) -> Vec<StockAdjustment> {
        self.lines
            .iter()
            .map(|line| StockAdjustment {
                item_id: line.item_id.clone(),
                amount: match line.pricing {
                    LinePricing::Quantity { quantity } => quantity,
                    LinePricing::Weighed { derived_weight, .. } => derived_weight.grams(),
                },
            })
            .collect()
    }
}

// =============================================================================
// Stock Adjustment
// =============================================================================

/// A single stock decrement implied by a sale line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    /// Catalog item to decrement.
    pub item_id: String,

    /// Decrement amount in the item's own sale unit
    /// (piece count for counted items, grams for weighed items).
    pub amount: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
