//! # arcade-store: Catalog Files for the Arcade Store
//!
//! This crate moves catalogs between memory and JSON files, and provides the
//! sample dataset the console starts from.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Arcade Store Data Flow                           │
//! │                                                                         │
//! │  Console startup (--import / --export)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   arcade-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────────────┐          ┌─────────────────────┐   │   │
//! │  │   │     Repositories      │          │        Seed         │   │   │
//! │  │   │  (repository/*.rs)    │          │     (seed.rs)       │   │   │
//! │  │   │                       │          │                     │   │   │
//! │  │   │ CatalogRepository     │          │ SAMPLE_GAMES        │   │   │
//! │  │   │   import_into         │          │ SAMPLE_DISCOUNTS    │   │   │
//! │  │   │   export_from         │          │ simulate_sales      │   │   │
//! │  │   └───────────────────────┘          └─────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   games_to_import.json / exported_games.json                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`repository`] - Catalog file import and export
//! - [`seed`] - Sample games, sample discounts, sales simulation
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use arcade_core::{Catalog, SalesManager};
//! use arcade_store::{seed, CatalogRepository};
//!
//! let mut catalog = Catalog::new();
//! CatalogRepository::new("games_to_import.json").import_into(&mut catalog)?;
//!
//! let mut sales = SalesManager::new();
//! seed::seed_discounts(sales.discounts_mut())?;
//!
//! CatalogRepository::new("exported_games.json").export_from(&catalog)?;
//! # Ok::<(), arcade_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::catalog::{read_catalog, write_catalog, CatalogRepository};
pub use seed::SimulationPlan;

/// File the seed binary writes and the console imports by default.
pub const DEFAULT_IMPORT_FILE: &str = "games_to_import.json";
