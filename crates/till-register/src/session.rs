//! # Register Session
//!
//! One cashier operating one register: a [`Register`] owns the catalog, the
//! cart, the stock ledger and the sale log for the session.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Register Session                                 │
//! │                                                                     │
//! │  Cashier Action            Session Method         State Change      │
//! │  ──────────────            ──────────────         ────────────      │
//! │                                                                     │
//! │  Type in search box ─────► search() ────────────► (read only)       │
//! │                                                                     │
//! │  Scan / click item ──────► add_to_cart() ───────► cart line added   │
//! │                                                                     │
//! │  Key weighed price ──────► add_weighed_to_cart()► weighed line      │
//! │                                                                     │
//! │  Change quantity ────────► update_line() ───────► line updated      │
//! │                                                                     │
//! │  Press Pay ──────────────► checkout() ──────────► Sale recorded,    │
//! │                                                   stock decremented,│
//! │                                                   cart cleared      │
//! │                                                                     │
//! │  SINGLE ACTOR: every method takes &mut self and runs to completion; │
//! │  no interleaving of two mutations on the same register is possible. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Resolution
//! The catalog's stock figures are a seed; the stock ledger is the live
//! source of truth once sales start decrementing. Items are resolved
//! against the ledger before any cart operation, so a second sale in the
//! same session sees stock reduced by the first.

use tracing::{debug, info, warn};

use till_core::validation::{
    validate_entered_price, validate_item_id, validate_quantity, validate_search_term,
};
use till_core::{checkout, Cart, Catalog, CatalogItem, Money, MAX_LINE_QUANTITY};

use crate::error::RegisterError;
use crate::inventory::StockLedger;
use crate::sales::SaleLog;
use crate::view::{CartView, Receipt};
use till_core::checkout::{Inventory, SaleSink};

/// A single-cashier register session.
#[derive(Debug)]
pub struct Register {
    catalog: Catalog,
    cart: Cart,
    stock: StockLedger,
    sales: SaleLog,
}

impl Register {
    /// Opens a register over a catalog, seeding the stock ledger from the
    /// catalog's stock-on-hand figures.
    pub fn new(catalog: Catalog) -> Self {
        let stock = StockLedger::from_catalog(&catalog);
        info!(items = catalog.len(), "Register opened");
        Register {
            catalog,
            cart: Cart::new(),
            stock,
            sales: SaleLog::new(),
        }
    }

    // =========================================================================
    // Catalog reads
    // =========================================================================

    /// Searches the catalog by name substring (case-insensitive).
    /// An empty term returns every item.
    pub fn search(&self, term: &str) -> Result<Vec<&CatalogItem>, RegisterError> {
        let term = validate_search_term(term)
            .map_err(|e| RegisterError::validation(e.to_string()))?;
        let results = self.catalog.search(&term);
        debug!(term = %term, count = results.len(), "Catalog search");
        Ok(results)
    }

    /// Looks up a catalog item by id.
    pub fn item(&self, item_id: &str) -> Result<&CatalogItem, RegisterError> {
        self.catalog
            .get(item_id)
            .ok_or_else(|| RegisterError::not_found("Item", item_id))
    }

    /// Resolves an item with its live stock level from the ledger.
    ///
    /// The catalog itself stays read-only; the ledger tracks decrements
    /// made by earlier checkouts in this session.
    fn resolve_item(&self, item_id: &str) -> Result<CatalogItem, RegisterError> {
        validate_item_id(item_id).map_err(|e| RegisterError::validation(e.to_string()))?;
        let mut item = self.item(item_id)?.clone();
        if let Some(level) = self.stock.stock_on_hand(&item.id) {
            item.stock_on_hand = level;
        }
        Ok(item)
    }

    // =========================================================================
    // Cart mutation
    // =========================================================================

    /// Adds a counted item to the cart (or increases its line).
    pub fn add_to_cart(&mut self, item_id: &str, quantity: i64) -> Result<CartView, RegisterError> {
        debug!(item_id = %item_id, quantity = %quantity, "add_to_cart");

        validate_quantity(quantity).map_err(|e| RegisterError::validation(e.to_string()))?;
        let item = self.resolve_item(item_id)?;
        self.cart.add_quantity_item(&item, quantity)?;

        Ok(CartView::from(&self.cart))
    }

    /// Adds a weighed item priced by the operator-entered total in cents.
    pub fn add_weighed_to_cart(
        &mut self,
        item_id: &str,
        entered_cents: i64,
    ) -> Result<CartView, RegisterError> {
        debug!(item_id = %item_id, entered_cents = %entered_cents, "add_weighed_to_cart");

        validate_entered_price(entered_cents)
            .map_err(|e| RegisterError::validation(e.to_string()))?;
        let item = self.resolve_item(item_id)?;
        self.cart
            .add_weighed_item(&item, Money::from_cents(entered_cents))?;

        Ok(CartView::from(&self.cart))
    }

    /// Sets the quantity of an existing counted line.
    /// A quantity of zero (or less) removes the line.
    pub fn update_line(&mut self, item_id: &str, quantity: i64) -> Result<CartView, RegisterError> {
        debug!(item_id = %item_id, quantity = %quantity, "update_line");

        if quantity > MAX_LINE_QUANTITY {
            return Err(RegisterError::validation(format!(
                "quantity cannot exceed {}",
                MAX_LINE_QUANTITY
            )));
        }
        let item = self.resolve_item(item_id)?;
        self.cart.update_quantity(&item, quantity)?;

        Ok(CartView::from(&self.cart))
    }

    /// Removes the line for an item. Idempotent: removing a line that is
    /// not in the cart is a no-op.
    pub fn remove_line(&mut self, item_id: &str) -> CartView {
        debug!(item_id = %item_id, "remove_line");
        self.cart.remove_line(item_id);
        CartView::from(&self.cart)
    }

    /// Clears the cart without producing a sale.
    pub fn clear_cart(&mut self) -> CartView {
        debug!("clear_cart");
        self.cart.clear();
        CartView::from(&self.cart)
    }

    /// Current cart contents and totals.
    pub fn cart_view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Finalizes the cart into a sale: snapshots, decrements stock
    /// (best-effort), records the sale, clears the cart.
    pub fn checkout(&mut self) -> Result<Receipt, RegisterError> {
        debug!(lines = self.cart.line_count(), "checkout");

        let outcome = checkout::checkout(&mut self.cart, &mut self.stock)?;

        // Fire-and-forget contract: the sale stands even when a decrement
        // fails; the failures are only logged.
        for (item_id, err) in &outcome.failed_adjustments {
            warn!(item_id = %item_id, error = %err, "Stock decrement failed after sale");
        }

        record_best_effort(&mut self.sales, &outcome.sale);

        info!(
            sale_id = %outcome.sale.id,
            total = %outcome.sale.total,
            lines = outcome.sale.lines.len(),
            "Sale completed"
        );

        Ok(Receipt::from(&outcome.sale))
    }

    // =========================================================================
    // Session state reads
    // =========================================================================

    /// The sale log for this session.
    pub fn sales(&self) -> &SaleLog {
        &self.sales
    }

    /// The live stock ledger for this session.
    pub fn stock(&self) -> &StockLedger {
        &self.stock
    }

    /// The catalog this register sells from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Hands a completed sale to the sink. Recording shares the
/// fire-and-forget contract with stock decrements: by this point the
/// customer has paid, so a storage failure is logged and the receipt is
/// still returned.
fn record_best_effort(sink: &mut dyn SaleSink, sale: &till_core::Sale) {
    if let Err(err) = sink.record_sale(sale) {
        warn!(sale_id = %sale.id, error = %err, "Failed to record sale");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
