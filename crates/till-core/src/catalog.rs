//! # Catalog
//!
//! Read-only, searchable access to sellable items.
//!
//! ## How Search Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Cashier types: "cola"                                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  case-insensitive substring match on item name                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────┐                              │
//! │  │ Coca-Cola 330ml   │ Beverages     │  ← MATCH!                    │
//! │  │ Cola Gummies      │ Snacks        │  ← MATCH!                    │
//! │  │ Pepsi 330ml       │ Beverages     │                              │
//! │  └───────────────────────────────────┘                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Results in catalog order; empty search term returns everything     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is read-only from the cart engine's perspective: searching
//! and lookups never mutate stock. Stock levels change only through the
//! [`Inventory`](crate::checkout::Inventory) collaborator at checkout.

use crate::types::CatalogItem;

/// An ordered, read-only collection of sellable items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Creates a catalog from a list of items, preserving order.
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Catalog { items }
    }

    /// Searches items by case-insensitive substring match on name.
    ///
    /// ## Behavior
    /// - Empty (or all-whitespace) term returns every item
    /// - Results keep catalog order
    ///
    /// ## Example
    /// ```rust
    /// use till_core::catalog::Catalog;
    /// use till_core::money::Money;
    /// use till_core::types::CatalogItem;
    ///
    /// let catalog = Catalog::from_items(vec![
    ///     CatalogItem::counted("1", "Coca-Cola 330ml", "Beverages", Money::from_cents(299), 24),
    ///     CatalogItem::counted("2", "Pepsi 330ml", "Beverages", Money::from_cents(279), 12),
    /// ]);
    ///
    /// assert_eq!(catalog.search("coca").len(), 1);
    /// assert_eq!(catalog.search("").len(), 2);
    /// ```
    pub fn search(&self, term: &str) -> Vec<&CatalogItem> {
        let term = term.trim().to_lowercase();

        if term.is_empty() {
            return self.items.iter().collect();
        }

        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Filters items by exact category label.
    pub fn in_category(&self, category: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Gets an item by id.
    ///
    /// ## Returns
    /// * `Some(&CatalogItem)` - item found
    /// * `None` - no item with that id; callers at the session layer
    ///   translate this into a not-found error
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Iterates all items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
