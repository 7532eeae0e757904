//! # Sales Manager
//!
//! Processes sales by composing the catalog, the discount table and the
//! sales ledger.
//!
//! ## Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       process_sale("Okami")                             │
//! │                                                                         │
//! │  1. Catalog::entry("Okami")          ── ProductNotFound if absent      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. DiscountTable::lookup("Okami")   ── 0% if absent                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. price.discounted(rate)           ── 19.99 at 50% → 10.00           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. SalesLedger::record(entry, paid) ── the only side effect           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The manager owns the discount table and the ledger. It borrows the
//! catalog per call, so the catalog stays editable between sales.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::discount::DiscountTable;
use crate::error::{CoreError, CoreResult};
use crate::ledger::{SaleRecord, SalesLedger, SalesSummary};
use crate::money::{Money, Price};
use crate::types::DiscountRate;
use crate::error::ValidationError;

/// Aggregate rows plus their grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesReport {
    pub rows: Vec<SalesSummary>,
    pub total_revenue: Money,
}

#[derive(Debug, Clone, Default)]
pub struct SalesManager {
    discounts: DiscountTable,
    ledger: SalesLedger,
}

impl SalesManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discounts(&self) -> &DiscountTable {
        &self.discounts
    }

    pub fn discounts_mut(&mut self) -> &mut DiscountTable {
        &mut self.discounts
    }

    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    /// The price a sale of `product_name` would record right now.
    pub fn quote(&self, catalog: &Catalog, product_name: &str) -> CoreResult<Money> {
        let product = catalog
            .get(product_name)
            .ok_or_else(|| CoreError::ProductNotFound(product_name.to_string()))?;

        let rate = self.discounts.lookup(product_name).unwrap_or_default();
        price_after(product.price(), rate)
    }

    /// Sells one unit of `product_name` and records it.
    ///
    /// ## Errors
    /// `ProductNotFound` if the catalog has no such product. Catalog and
    /// discount table are never modified.
    pub fn process_sale(&mut self, catalog: &Catalog, product_name: &str) -> CoreResult<&SaleRecord> {
        let entry = catalog
            .entry(product_name)
            .ok_or_else(|| CoreError::ProductNotFound(product_name.to_string()))?;

        let rate = self.discounts.lookup(product_name).unwrap_or_default();
        let price_paid = price_after(entry.product().price(), rate)?;

        self.ledger.record(entry, price_paid)
    }

    /// Per-product aggregates (catalog order) and total revenue.
    pub fn summary(&self, catalog: &Catalog) -> SalesReport {
        SalesReport {
            rows: self.ledger.aggregate(catalog),
            total_revenue: self.ledger.total_revenue(),
        }
    }

    pub fn total_revenue(&self) -> Money {
        self.ledger.total_revenue()
    }
}

fn price_after(price: Price, rate: DiscountRate) -> CoreResult<Money> {
    price.discounted(rate).ok_or_else(|| {
        ValidationError::OutOfRange {
            field: "price_paid".to_string(),
            min: 0,
            max: i64::MAX,
        }
        .into()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
