//! # arcade-core: Pure Domain Logic for the Arcade Store
//!
//! This crate holds the store's domain model and bookkeeping as plain data
//! structures with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Arcade Store Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/console (arcade binary)                    │   │
//! │  │    list ── buy <name> ── discounts ── summary ── graph          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ arcade-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐ │   │
//! │  │  │validation│ │ product  │ │ catalog  │ │ discount │ │ledger │ │   │
//! │  │  │  rules   │ │  Game    │ │ Catalog  │ │  Table   │ │ Sales │ │   │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └──────────┘ └───────┘ │   │
//! │  │                         sales::SalesManager                     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              arcade-store (JSON catalog files, seed)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Field rules (name, price, genre, studios, release date)
//! - [`product`] - `Game`, `Product` and the catalog record format
//! - [`catalog`] - `Catalog`: add/remove/update/get/list/import/export
//! - [`discount`] - `DiscountTable`
//! - [`ledger`] - `SalesLedger` and `SaleRecord`
//! - [`sales`] - `SalesManager`, which processes a sale end to end
//! - [`money`] - `Price` (exact catalog prices) and `Money` (integer cents)
//! - [`types`] - `Genre`, `ProductKind`, `ProductId`, `DiscountRate`
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use arcade_core::{Catalog, Game, Genre, Money, SalesManager};
//!
//! let mut catalog = Catalog::new();
//! catalog
//!     .add(Game::new(
//!         "Bastion",
//!         Money::from_cents(1499),
//!         vec![Genre::Action, Genre::RolePlaying],
//!         "Supergiant Games",
//!         "Warner Bros",
//!         "2011/07/20",
//!     )?)?;
//!
//! let mut sales = SalesManager::new();
//! sales.discounts_mut().add("Bastion", 20.0)?;
//!
//! let sale = sales.process_sale(&catalog, "Bastion")?;
//! assert_eq!(sale.price_paid().cents(), 1199);
//! # Ok::<(), arcade_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod discount;
pub mod error;
pub mod ledger;
pub mod money;
pub mod product;
pub mod sales;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogEntry, ImportReport, ListQuery, RejectedRecord, SortKey};
pub use discount::{Discount, DiscountTable};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{SaleRecord, SalesLedger, SalesSummary};
pub use money::{Money, Price};
pub use product::{Game, GameRecord, Product, ProductRecord};
pub use sales::{SalesManager, SalesReport};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum characters in a product name.
pub const MAX_NAME_CHARS: usize = 64;

/// Minimum characters in a developer or publisher name.
pub const MIN_STUDIO_CHARS: usize = 2;

/// Maximum characters in a developer or publisher name.
pub const MAX_STUDIO_CHARS: usize = 64;

/// Highest accepted price, in whole currency units.
///
/// Keeps every price paid far inside `Money`'s cent range.
pub const MAX_PRICE: i64 = 1_000_000_000;

/// chrono format of release dates in catalog files (`2014/12/11`).
pub const RELEASE_DATE_FORMAT: &str = "%Y/%m/%d";
