//! # Discount Table
//!
//! Maps product names to a percentage price reduction.
//!
//! The table is deliberately decoupled from the catalog: a discount can name
//! a product that does not exist (yet). That is only noticed when a sale for
//! that name is attempted, and then it is the missing product that fails.

use crate::error::{CoreError, CoreResult};
use crate::types::DiscountRate;
use crate::validation::validate_discount_percentage;

/// One discount entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    pub product_name: String,
    pub rate: DiscountRate,
}

/// Product name → discount, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DiscountTable {
    discounts: Vec<Discount>,
}

impl DiscountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.discounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }

    /// Registers a discount.
    ///
    /// ## Errors
    /// - `Validation` if the percentage is outside [0, 100]
    /// - `DuplicateDiscount` if the name already has one (remove it first)
    ///
    /// ## Example
    /// ```rust
    /// use arcade_core::discount::DiscountTable;
    ///
    /// let mut table = DiscountTable::new();
    /// table.add("Okami", 50.0).unwrap();
    /// assert!(table.add("Okami", 10.0).is_err());
    /// assert_eq!(table.lookup("Okami").unwrap().bps(), 5000);
    /// ```
    pub fn add(&mut self, product_name: impl Into<String>, percentage: f64) -> CoreResult<()> {
        let product_name = product_name.into();
        let rate = validate_discount_percentage(percentage)?;

        if self.position(&product_name).is_some() {
            return Err(CoreError::DuplicateDiscount(product_name));
        }

        self.discounts.push(Discount { product_name, rate });
        Ok(())
    }

    /// Removes a discount and returns its rate.
    pub fn remove(&mut self, product_name: &str) -> CoreResult<DiscountRate> {
        let position = self
            .position(product_name)
            .ok_or_else(|| CoreError::DiscountNotFound(product_name.to_string()))?;
        Ok(self.discounts.remove(position).rate)
    }

    /// The discount for a name, if any.
    pub fn lookup(&self, product_name: &str) -> Option<DiscountRate> {
        self.position(product_name).map(|i| self.discounts[i].rate)
    }

    /// All discounts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Discount> {
        self.discounts.iter()
    }

    fn position(&self, product_name: &str) -> Option<usize> {
        self.discounts
            .iter()
            .position(|d| d.product_name == product_name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
