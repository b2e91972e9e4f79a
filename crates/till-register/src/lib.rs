//! # till-register: Session Layer for Till
//!
//! This crate wires the pure engine in `till-core` to the world a cashier
//! actually touches: a [`Register`] session, an in-memory stock ledger, a
//! sale log, and JSON-friendly view models.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 ★ till-register (THIS CRATE) ★                      │
//! │                                                                     │
//! │  ┌──────────┐  ┌─────────────┐  ┌──────────┐  ┌──────────────┐     │
//! │  │ session  │  │  inventory  │  │  sales   │  │     view     │     │
//! │  │ Register │  │ StockLedger │  │ SaleLog  │  │ CartView     │     │
//! │  │          │  │ (Inventory) │  │(SaleSink)│  │ Receipt      │     │
//! │  └────┬─────┘  └──────┬──────┘  └────┬─────┘  └──────────────┘     │
//! │       │               │              │                              │
//! │       ▼               ▼              ▼                              │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                      till-core                              │   │
//! │  │        Catalog • Cart • checkout() • Money • Weight         │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is in-memory and single-threaded; persistence and
//! transport are deliberately out of scope for this layer.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod sales;
pub mod session;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorCode, RegisterError};
pub use inventory::StockLedger;
pub use sales::SaleLog;
pub use session::Register;
pub use view::{CartTotals, CartView, LineView, Receipt};
