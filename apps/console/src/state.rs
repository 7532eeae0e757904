//! # Store State
//!
//! The catalog and the sales manager the console works on, and the startup
//! sequence that fills them.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       StoreState::bootstrap                             │
//! │                                                                         │
//! │  1. Catalog ─────────────────────────────────────────────────────────► │
//! │     • import_path set: import it, print skipped records                │
//! │     • otherwise: sample games if seed_defaults                         │
//! │                                                                         │
//! │  2. Discounts ───────────────────────────────────────────────────────► │
//! │     • Bastion 20%, Celeste 75%, Chrono Trigger 90%, Okami 50%          │
//! │                                                                         │
//! │  3. Export ──────────────────────────────────────────────────────────► │
//! │     • export_path set: write the catalog                               │
//! │                                                                         │
//! │  4. Simulation ──────────────────────────────────────────────────────► │
//! │     • enabled: every product sells plan.sales_for(i) times             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use anyhow::Context;
use arcade_core::{Catalog, SalesManager};
use arcade_store::{seed, CatalogRepository};
use tracing::info;

use crate::config::AppConfig;
use crate::report;

#[derive(Debug, Default)]
pub struct StoreState {
    pub catalog: Catalog,
    pub sales: SalesManager,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the startup sequence, printing progress to `out`.
    ///
    /// ## Errors
    /// A catalog file that can't be imported or exported stops startup.
    /// Skipped records inside an imported file don't.
    pub fn bootstrap<W: Write>(config: &AppConfig, out: &mut W) -> anyhow::Result<Self> {
        let mut state = StoreState::new();

        match &config.catalog.import_path {
            Some(path) => {
                let report = CatalogRepository::new(path).import_into(&mut state.catalog)?;
                report::write_import_report(out, &path.display().to_string(), &report)?;
            }
            None if config.catalog.seed_defaults => {
                let added = seed::seed_catalog(&mut state.catalog)?;
                writeln!(out, "Loaded {} sample games", added)?;
            }
            None => info!("Starting with an empty catalog"),
        }

        seed::seed_discounts(state.sales.discounts_mut())?;

        if let Some(path) = &config.catalog.export_path {
            let written = CatalogRepository::new(path).export_from(&state.catalog)?;
            writeln!(out, "Exported {} products to {}", written, path.display())?;
        }

        if config.simulation.enabled {
            let recorded = seed::simulate_sales(&state.catalog, &mut state.sales, &config.simulation.plan())
                .context("sales simulation failed")?;
            writeln!(out, "Simulated {} sales", recorded)?;
        }

        info!(
            products = state.catalog.len(),
            discounts = state.sales.discounts().len(),
            sales = state.sales.ledger().len(),
            "Store ready"
        );
        Ok(state)
    }
}
