//! # Sale Log
//!
//! In-memory implementation of the core [`SaleSink`] collaborator: an
//! append-only log of completed sales.
//!
//! This is the persistence collaborator stand-in. Sales are stored exactly
//! as handed over and never mutated afterwards; no retry contract is
//! defined here (a real backend would own retries).

use tracing::debug;

use till_core::{Money, Sale, SaleSink, SaleSinkError};

/// Append-only list of completed sales.
#[derive(Debug, Clone, Default)]
pub struct SaleLog {
    sales: Vec<Sale>,
}

impl SaleLog {
    /// Creates an empty sale log.
    pub fn new() -> Self {
        SaleLog { sales: Vec::new() }
    }

    /// Looks up a sale by id.
    pub fn get(&self, sale_id: &str) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == sale_id)
    }

    /// Iterates sales in completion order.
    pub fn iter(&self) -> impl Iterator<Item = &Sale> {
        self.sales.iter()
    }

    /// Number of recorded sales.
    pub fn len(&self) -> usize {
        self.sales.len()
    }

    /// Checks if no sales have been recorded.
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    /// Sum of all recorded sale totals.
    pub fn takings(&self) -> Money {
        self.sales
            .iter()
            .fold(Money::zero(), |acc, s| acc + s.total)
    }
}

impl SaleSink for SaleLog {
    fn record_sale(&mut self, sale: &Sale) -> Result<(), SaleSinkError> {
        debug!(sale_id = %sale.id, total = %sale.total, lines = sale.lines.len(), "Recording sale");
        self.sales.push(sale.clone());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
