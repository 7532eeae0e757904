//! # Catalog
//!
//! The authoritative registry of products, keyed by unique name.
//!
//! ## Storage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog                                        │
//! │                                                                         │
//! │  entries: Vec<CatalogEntry>          index: HashMap<name, position>    │
//! │  ┌────┬──────────────────────┐       ┌──────────────────┬─────┐        │
//! │  │ 0  │ id, Bastion, ...     │ ◄──── │ "Bastion"        │  0  │        │
//! │  │ 1  │ id, Celeste, ...     │ ◄──── │ "Celeste"        │  1  │        │
//! │  │ 2  │ id, Okami, ...       │ ◄──── │ "Okami"          │  2  │        │
//! │  └────┴──────────────────────┘       └──────────────────┴─────┘        │
//! │                                                                         │
//! │  Vec order = insertion order (listing and export order)                │
//! │  HashMap   = O(1) lookups by name                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is the sole owner of its products. Callers get `&Product` /
//! `&CatalogEntry` borrows; sale records hold a [`ProductId`], never a copy.
//!
//! Every failing operation leaves the catalog exactly as it was.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};
use crate::product::{Product, ProductRecord};
use crate::types::ProductId;

// =============================================================================
// Catalog Entry
// =============================================================================

/// A product together with its catalog identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    id: ProductId,
    product: Product,
    added_at: DateTime<Utc>,
}

impl CatalogEntry {
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    /// When the product was added to this catalog.
    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Attribute to sort a listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Developer,
    Publisher,
    ReleaseDate,
}

impl SortKey {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::Price => a.price().cmp(&b.price()),
            SortKey::Developer => game_key(a, b, |g| g.developer().to_string()),
            SortKey::Publisher => game_key(a, b, |g| g.publisher().to_string()),
            SortKey::ReleaseDate => game_key(a, b, |g| g.release_date()),
        }
    }
}

fn game_key<K: Ord>(a: &Product, b: &Product, key: impl Fn(&crate::product::Game) -> K) -> Ordering {
    a.as_game().map(&key).cmp(&b.as_game().map(&key))
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "developer" => Ok(SortKey::Developer),
            "publisher" => Ok(SortKey::Publisher),
            "release_date" | "release-date" | "date" => Ok(SortKey::ReleaseDate),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

/// Filter + sort options for [`Catalog::list`].
///
/// ## Example
/// ```rust
/// use arcade_core::catalog::{ListQuery, SortKey};
/// use arcade_core::money::Price;
///
/// let query = ListQuery::new()
///     .filter(|p| p.price() < Price::new(15, 0))
///     .sort_by(SortKey::Price)
///     .reverse(true);
/// ```
#[derive(Default)]
pub struct ListQuery<'a> {
    filter: Option<Box<dyn Fn(&Product) -> bool + 'a>>,
    sort_key: Option<SortKey>,
    reverse: bool,
}

impl<'a> ListQuery<'a> {
    /// Everything, in insertion order.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, predicate: impl Fn(&Product) -> bool + 'a) -> Self {
        self.filter = Some(Box::new(predicate));
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_key = Some(key);
        self
    }

    /// Sort descending. Has no effect without a sort key.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

// =============================================================================
// Import Report
// =============================================================================

/// One record an import skipped.
#[derive(Debug)]
pub struct RejectedRecord {
    /// Position in the source array.
    pub index: usize,
    /// Product name, when the record got far enough to have one.
    pub name: Option<String>,
    pub error: CoreError,
}

/// Outcome of [`Catalog::import_records`].
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub rejected: Vec<RejectedRecord>,
}

impl ImportReport {
    /// True when every record made it in.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Products keyed by unique name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Adds a product.
    ///
    /// ## Errors
    /// `DuplicateProduct` if the name is taken. The existing product is left
    /// untouched.
    pub fn add(&mut self, product: impl Into<Product>) -> CoreResult<ProductId> {
        let product = product.into();
        let name = product.name().to_string();

        if self.index.contains_key(&name) {
            return Err(CoreError::DuplicateProduct(name));
        }

        let id = ProductId::new();
        self.index.insert(name, self.entries.len());
        self.entries.push(CatalogEntry {
            id,
            product,
            added_at: Utc::now(),
        });
        Ok(id)
    }

    /// Removes a product and returns it.
    ///
    /// ## Errors
    /// `ProductNotFound` if absent.
    pub fn remove(&mut self, name: &str) -> CoreResult<Product> {
        let position = self
            .index
            .remove(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        let entry = self.entries.remove(position);
        for later in &self.entries[position..] {
            if let Some(slot) = self.index.get_mut(later.name()) {
                *slot -= 1;
            }
        }
        Ok(entry.product)
    }

    /// Updates several attributes at once, all or nothing.
    ///
    /// ## How It Works
    /// ```text
    /// 1. Find the entry                 ── ProductNotFound
    /// 2. Clone the product
    /// 3. Apply every update to the clone ── InvalidField / Validation
    /// 4. New name taken by another entry? ── DuplicateProduct
    /// 5. Swap the clone in, re-key the index if renamed
    /// ```
    /// Steps 1-4 never touch the catalog, so any error leaves it unchanged.
    /// A rename keeps the entry's position and its [`ProductId`].
    pub fn update(&mut self, name: &str, updates: &Map<String, Value>) -> CoreResult<()> {
        let position = *self
            .index
            .get(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        let mut updated = self.entries[position].product.clone();
        for (field, value) in updates {
            updated.set_field(field, value)?;
        }

        let new_name = updated.name().to_string();
        if new_name != name {
            if self.index.contains_key(&new_name) {
                return Err(CoreError::DuplicateProduct(new_name));
            }
            self.index.remove(name);
            self.index.insert(new_name, position);
        }

        self.entries[position].product = updated;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Looks up a product by name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.entry(name).map(CatalogEntry::product)
    }

    /// Looks up a product with its identity.
    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// All products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.entries.iter().map(CatalogEntry::product)
    }

    /// All names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(CatalogEntry::name)
    }

    /// Filters, then stable-sorts.
    ///
    /// ## Errors
    /// `NoProductsFound` if nothing matches. Callers that accept an empty
    /// listing match on that variant.
    pub fn list(&self, query: ListQuery<'_>) -> CoreResult<Vec<&Product>> {
        let mut products: Vec<&Product> = match &query.filter {
            Some(predicate) => self.products().filter(|p| predicate(*p)).collect(),
            None => self.products().collect(),
        };

        if let Some(key) = query.sort_key {
            // Comparator flipped rather than the output reversed, so equal
            // elements keep insertion order in both directions.
            if query.reverse {
                products.sort_by(|a, b| key.compare(b, a));
            } else {
                products.sort_by(|a, b| key.compare(a, b));
            }
        }

        if products.is_empty() {
            return Err(CoreError::NoProductsFound);
        }
        Ok(products)
    }

    // -------------------------------------------------------------------------
    // Import / Export
    // -------------------------------------------------------------------------

    /// Adds every valid record; skips and reports the rest.
    ///
    /// ## Per-Record Failures
    /// ```text
    /// record ──► ProductRecord::from_value ──► Product::from_record ──► add
    ///              │ InvalidRecord               │ Validation           │ DuplicateProduct
    ///              ▼                             ▼                      ▼
    ///            rejected                      rejected               rejected
    /// ```
    /// None of these stop the loop.
    pub fn import_records(&mut self, records: impl IntoIterator<Item = Value>) -> ImportReport {
        let mut report = ImportReport::default();

        for (index, value) in records.into_iter().enumerate() {
            let name = value
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string);

            let result = ProductRecord::from_value(value)
                .and_then(Product::from_record)
                .and_then(|product| self.add(product));

            match result {
                Ok(_) => report.imported += 1,
                Err(error) => report.rejected.push(RejectedRecord { index, name, error }),
            }
        }

        report
    }

    /// Every product as a kind-tagged record, in insertion order.
    pub fn export_records(&self) -> Vec<ProductRecord> {
        self.products().map(Product::to_record).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
