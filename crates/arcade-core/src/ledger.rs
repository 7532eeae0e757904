//! # Sales Ledger
//!
//! Append-only log of completed sales.
//!
//! ## Record Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SalesManager::process_sale("Okami")                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SalesLedger::record(entry, $10.00)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SaleRecord { product_id, name snapshot, $10.00, now }  ── frozen      │
//! │                                                                         │
//! │  No update, no delete. Aggregates are computed on demand.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records reference the product by [`ProductId`], the catalog's identity
//! for an entry. The name is kept as a snapshot for the history listing.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ProductId;
use crate::validation::validate_price_paid;

// =============================================================================
// Sale Record
// =============================================================================

/// One completed sale. Immutable: fields are only readable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    id: Uuid,
    product_id: ProductId,
    product_name: String,
    price_paid: Money,
    sold_at: DateTime<Utc>,
}

impl SaleRecord {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The catalog entry this sale belongs to.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Product name at time of sale.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Price after discount.
    pub fn price_paid(&self) -> Money {
        self.price_paid
    }

    pub fn sold_at(&self) -> DateTime<Utc> {
        self.sold_at
    }
}

// =============================================================================
// Sales Summary
// =============================================================================

/// Aggregate for one catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub product_name: String,
    pub count: u64,
    pub total_earned: Money,
}

// =============================================================================
// Sales Ledger
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    records: Vec<SaleRecord>,
    /// Running sum of `records[..].price_paid`. Every per-product total is
    /// bounded by it, so aggregation cannot overflow either.
    total: Money,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a sale stamped with the current time.
    ///
    /// ## Errors
    /// - `Validation` if `price_paid` is negative
    /// - `RevenueOverflow` if the total would leave `Money`'s range
    ///
    /// Nothing is appended on error.
    pub fn record(&mut self, product: &CatalogEntry, price_paid: Money) -> CoreResult<&SaleRecord> {
        validate_price_paid(price_paid)?;
        self.total = self
            .total
            .checked_add(price_paid)
            .ok_or_else(|| CoreError::RevenueOverflow(product.name().to_string()))?;

        self.records.push(SaleRecord {
            id: Uuid::new_v4(),
            product_id: product.id(),
            product_name: product.name().to_string(),
            price_paid,
            sold_at: Utc::now(),
        });

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Every sale in the order it happened.
    pub fn history(&self) -> &[SaleRecord] {
        &self.records
    }

    /// One row per catalog product, in catalog order.
    ///
    /// Products without sales get a row with zero count and zero total.
    /// Sales of products no longer in the catalog have no row, but still
    /// count toward [`SalesLedger::total_revenue`].
    pub fn aggregate(&self, catalog: &Catalog) -> Vec<SalesSummary> {
        let mut per_product: HashMap<ProductId, (u64, Money)> = HashMap::new();
        for record in &self.records {
            let slot = per_product
                .entry(record.product_id)
                .or_insert((0, Money::zero()));
            slot.0 += 1;
            slot.1 += record.price_paid;
        }

        catalog
            .entries()
            .map(|entry| {
                let (count, total_earned) = per_product
                    .get(&entry.id())
                    .copied()
                    .unwrap_or((0, Money::zero()));
                SalesSummary {
                    product_name: entry.name().to_string(),
                    count,
                    total_earned,
                }
            })
            .collect()
    }

    /// Sum of every recorded price paid.
    pub fn total_revenue(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Game;

    fn catalog_with(names: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for name in names {
            catalog
                .add(
                    Game::new(
                        *name,
                        Money::from_cents(1000),
                        vec![],
                        "Studio",
                        "Publisher",
                        "2020/01/01",
                    )
                    .unwrap(),
                )
                .unwrap();
        }
        catalog
    }

    #[test]
    fn test_record_appends() {
        let catalog = catalog_with(&["Okami"]);
        let mut ledger = SalesLedger::new();
        let entry = catalog.entry("Okami").unwrap();

        let record = ledger.record(entry, Money::from_cents(500)).unwrap();
        assert_eq!(record.product_name(), "Okami");
        assert_eq!(record.product_id(), entry.id());
        assert_eq!(record.price_paid().cents(), 500);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_record_rejects_negative_price() {
        let catalog = catalog_with(&["Okami"]);
        let mut ledger = SalesLedger::new();
        let entry = catalog.entry("Okami").unwrap();

        assert!(ledger.record(entry, Money::from_cents(-1)).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_record_rejects_revenue_overflow() {
        let catalog = catalog_with(&["Okami"]);
        let mut ledger = SalesLedger::new();
        let entry = catalog.entry("Okami").unwrap();

        ledger.record(entry, Money::from_cents(i64::MAX - 10)).unwrap();
        let err = ledger.record(entry, Money::from_cents(11)).unwrap_err();
        assert!(matches!(err, CoreError::RevenueOverflow(_)));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total_revenue().cents(), i64::MAX - 10);
        assert_eq!(ledger.aggregate(&catalog)[0].total_earned.cents(), i64::MAX - 10);
    }

    #[test]
    fn test_aggregate_follows_catalog_order_and_includes_zero_rows() {
        let catalog = catalog_with(&["A", "B", "C"]);
        let mut ledger = SalesLedger::new();

        let c = catalog.entry("C").unwrap();
        let a = catalog.entry("A").unwrap();
        ledger.record(c, Money::from_cents(300)).unwrap();
        ledger.record(a, Money::from_cents(100)).unwrap();
        ledger.record(c, Money::from_cents(250)).unwrap();

        let rows = ledger.aggregate(&catalog);
        assert_eq!(
            rows,
            vec![
                SalesSummary {
                    product_name: "A".to_string(),
                    count: 1,
                    total_earned: Money::from_cents(100),
                },
                SalesSummary {
                    product_name: "B".to_string(),
                    count: 0,
                    total_earned: Money::zero(),
                },
                SalesSummary {
                    product_name: "C".to_string(),
                    count: 2,
                    total_earned: Money::from_cents(550),
                },
            ]
        );
        assert_eq!(ledger.total_revenue().cents(), 650);
    }

    #[test]
    fn test_total_revenue_of_empty_ledger_is_zero() {
        let ledger = SalesLedger::new();
        assert!(ledger.total_revenue().is_zero());
        assert!(ledger.aggregate(&Catalog::new()).is_empty());
    }

    #[test]
    fn test_removed_product_still_counts_toward_revenue() {
        let mut catalog = catalog_with(&["A", "B"]);
        let mut ledger = SalesLedger::new();
        ledger.record(catalog.entry("A").unwrap(), Money::from_cents(100)).unwrap();
        ledger.record(catalog.entry("B").unwrap(), Money::from_cents(200)).unwrap();

        catalog.remove("A").unwrap();

        let rows = ledger.aggregate(&catalog);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_earned.cents(), 200);
        assert_eq!(ledger.total_revenue().cents(), 300);
        assert_eq!(ledger.history()[0].product_name(), "A");
    }
}
