//! # Repository Module
//!
//! File-backed repositories for the arcade store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Console startup / seed binary                                         │
//! │       │                                                                 │
//! │       │  CatalogRepository::new(path).import_into(&mut catalog)        │
//! │       ▼                                                                 │
//! │  CatalogRepository                                                     │
//! │  ├── import_into(&self, &mut Catalog) -> ImportReport                  │
//! │  └── export_from(&self, &Catalog)     -> records written               │
//! │       │                                                                 │
//! │       │  serde_json                                                     │
//! │       ▼                                                                 │
//! │  JSON catalog file                                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CatalogRepository`](catalog::CatalogRepository) - Catalog import and export

pub mod catalog;
