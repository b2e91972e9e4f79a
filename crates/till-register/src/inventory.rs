//! # Stock Ledger
//!
//! In-memory implementation of the core [`Inventory`] collaborator.
//!
//! ## Delta Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                            │
//! │                                                                     │
//! │  Checkout decrements, one delta per sale line:                      │
//! │    counted line  →  level - quantity                                │
//! │    weighed line  →  level - derived grams                           │
//! │                                                                     │
//! │  Levels MAY go negative: by the time the decrement runs the sale    │
//! │  has already happened, so the ledger records reality rather than    │
//! │  flooring at zero.                                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use tracing::debug;

use till_core::{Catalog, Inventory, InventoryError};

/// In-memory stock levels keyed by item id.
///
/// Each level is in the item's own sale unit: piece count for counted
/// items, grams for weighed items.
#[derive(Debug, Clone, Default)]
pub struct StockLedger {
    levels: HashMap<String, i64>,
}

impl StockLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        StockLedger {
            levels: HashMap::new(),
        }
    }

    /// Seeds the ledger from a catalog's stock-on-hand figures.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        StockLedger {
            levels: catalog
                .iter()
                .map(|item| (item.id.clone(), item.stock_on_hand))
                .collect(),
        }
    }

    /// Sets the level for an item (restocking / corrections).
    pub fn set_level(&mut self, item_id: impl Into<String>, level: i64) {
        self.levels.insert(item_id.into(), level);
    }

    /// Number of items tracked.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Checks if the ledger tracks no items.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Inventory for StockLedger {
    fn stock_on_hand(&self, item_id: &str) -> Option<i64> {
        self.levels.get(item_id).copied()
    }

    fn decrement_stock(&mut self, item_id: &str, amount: i64) -> Result<(), InventoryError> {
        match self.levels.get_mut(item_id) {
            Some(level) => {
                *level -= amount;
                debug!(item_id = %item_id, amount = %amount, level = %level, "Stock decremented");
                Ok(())
            }
            None => Err(InventoryError::UnknownItem(item_id.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
