//! # Sample Data
//!
//! The dataset the console starts from when nothing is imported, plus a
//! deterministic sales simulation.
//!
//! ## Startup Use
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  seed_catalog(&mut catalog)           ── SAMPLE_GAMES not yet present  │
//! │  seed_discounts(sales.discounts_mut())── SAMPLE_DISCOUNTS              │
//! │  simulate_sales(&catalog, &mut sales, &plan)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  product #i sells plan.sales_for(i) times, same counts every run       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use arcade_core::{Catalog, CoreResult, DiscountTable, Game, Genre, Money, SalesManager};
use tracing::{debug, info};

use crate::error::StoreResult;

// =============================================================================
// Sample Games
// =============================================================================

/// One game of the sample dataset.
#[derive(Debug, Clone, Copy)]
pub struct SampleGame {
    pub name: &'static str,
    pub price_cents: i64,
    pub genre: &'static [Genre],
    pub developer: &'static str,
    pub publisher: &'static str,
    pub release_date: &'static str,
}

impl SampleGame {
    pub fn to_game(&self) -> CoreResult<Game> {
        Ok(Game::new(
            self.name,
            Money::from_cents(self.price_cents),
            self.genre.to_vec(),
            self.developer,
            self.publisher,
            self.release_date,
        )?)
    }
}

pub const SAMPLE_GAMES: &[SampleGame] = &[
    SampleGame {
        name: "Bastion",
        price_cents: 1499,
        genre: &[Genre::Action, Genre::RolePlaying],
        developer: "Supergiant Games",
        publisher: "Warner Bros",
        release_date: "2011/07/20",
    },
    SampleGame {
        name: "Celeste",
        price_cents: 1999,
        genre: &[Genre::Platformer],
        developer: "Maddy Makes Games",
        publisher: "Maddy Makes Games",
        release_date: "2018/01/25",
    },
    SampleGame {
        name: "Chrono Trigger",
        price_cents: 1499,
        genre: &[Genre::RolePlaying],
        developer: "Square",
        publisher: "Square Enix",
        release_date: "1995/03/11",
    },
    SampleGame {
        name: "Okami",
        price_cents: 1999,
        genre: &[Genre::Action, Genre::Adventure],
        developer: "Clover Studio",
        publisher: "Capcom",
        release_date: "2006/04/20",
    },
    SampleGame {
        name: "Hades",
        price_cents: 2499,
        genre: &[Genre::Action, Genre::Roguelike],
        developer: "Supergiant Games",
        publisher: "Supergiant Games",
        release_date: "2020/09/17",
    },
    SampleGame {
        name: "Hollow Knight",
        price_cents: 1499,
        genre: &[Genre::Metroidvania, Genre::Platformer],
        developer: "Team Cherry",
        publisher: "Team Cherry",
        release_date: "2017/02/24",
    },
    SampleGame {
        name: "Stardew Valley",
        price_cents: 1499,
        genre: &[Genre::Simulation, Genre::RolePlaying],
        developer: "ConcernedApe",
        publisher: "ConcernedApe",
        release_date: "2016/02/26",
    },
    SampleGame {
        name: "The Witness",
        price_cents: 3999,
        genre: &[Genre::Puzzle, Genre::Adventure],
        developer: "Thekla Inc.",
        publisher: "Thekla Inc.",
        release_date: "2016/01/26",
    },
    SampleGame {
        name: "Portal 2",
        price_cents: 999,
        genre: &[Genre::Puzzle, Genre::Platformer],
        developer: "Valve",
        publisher: "Valve",
        release_date: "2011/04/19",
    },
    SampleGame {
        name: "The Talos Principle",
        price_cents: 3999,
        genre: &[Genre::Puzzle, Genre::Adventure],
        developer: "Croteam",
        publisher: "Devolver Digital",
        release_date: "2014/12/11",
    },
    SampleGame {
        name: "Into the Breach",
        price_cents: 1499,
        genre: &[Genre::Strategy, Genre::Roguelike],
        developer: "Subset Games",
        publisher: "Subset Games",
        release_date: "2018/02/27",
    },
    SampleGame {
        name: "Dead Cells",
        price_cents: 2499,
        genre: &[Genre::Action, Genre::Roguelike, Genre::Metroidvania],
        developer: "Motion Twin",
        publisher: "Motion Twin",
        release_date: "2018/08/07",
    },
    SampleGame {
        name: "Resident Evil 4",
        price_cents: 1999,
        genre: &[Genre::Horror, Genre::Shooter],
        developer: "Capcom",
        publisher: "Capcom",
        release_date: "2005/01/11",
    },
    SampleGame {
        name: "Forza Horizon 5",
        price_cents: 5999,
        genre: &[Genre::Racing, Genre::Sports],
        developer: "Playground Games",
        publisher: "Xbox Game Studios",
        release_date: "2021/11/09",
    },
];

/// Percentage off per product name.
pub const SAMPLE_DISCOUNTS: &[(&str, f64)] = &[
    ("Bastion", 20.0),
    ("Celeste", 75.0),
    ("Chrono Trigger", 90.0),
    ("Okami", 50.0),
];

/// Adds every sample game whose name isn't taken yet.
///
/// Returns how many were added.
pub fn seed_catalog(catalog: &mut Catalog) -> StoreResult<usize> {
    let mut added = 0;
    for sample in SAMPLE_GAMES {
        if catalog.contains(sample.name) {
            debug!(name = sample.name, "Sample game already in catalog");
            continue;
        }
        catalog.add(sample.to_game()?)?;
        added += 1;
    }

    info!(added, "Seeded sample games");
    Ok(added)
}

/// Adds every sample discount whose product has none yet.
///
/// Products don't have to be in any catalog.
pub fn seed_discounts(discounts: &mut DiscountTable) -> StoreResult<usize> {
    let mut added = 0;
    for &(name, percentage) in SAMPLE_DISCOUNTS {
        if discounts.lookup(name).is_some() {
            continue;
        }
        discounts.add(name, percentage)?;
        added += 1;
    }

    info!(added, "Seeded sample discounts");
    Ok(added)
}

// =============================================================================
// Sales Simulation
// =============================================================================

/// How many sales each product gets during a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationPlan {
    min_sales_per_product: u32,
    max_sales_per_product: u32,
}

impl SimulationPlan {
    /// Bounds are inclusive and swapped if given in the wrong order.
    pub fn new(min_sales_per_product: u32, max_sales_per_product: u32) -> Self {
        SimulationPlan {
            min_sales_per_product: min_sales_per_product.min(max_sales_per_product),
            max_sales_per_product: min_sales_per_product.max(max_sales_per_product),
        }
    }

    pub fn min_sales_per_product(&self) -> u32 {
        self.min_sales_per_product
    }

    pub fn max_sales_per_product(&self) -> u32 {
        self.max_sales_per_product
    }

    /// Sales for the product at catalog position `index`.
    ///
    /// Spread over the range by a fixed stride, so runs are reproducible.
    pub fn sales_for(&self, index: usize) -> u32 {
        let span = u64::from(self.max_sales_per_product - self.min_sales_per_product) + 1;
        let offset = (index as u64).wrapping_mul(7919) % span;
        // offset <= max - min
        self.min_sales_per_product + offset as u32
    }
}

impl Default for SimulationPlan {
    fn default() -> Self {
        SimulationPlan::new(1000, 10_000)
    }
}

/// Sells every catalog product the number of times `plan` gives it.
///
/// Discounts in `sales` apply as for any sale. Returns the number of sales
/// recorded.
pub fn simulate_sales(catalog: &Catalog, sales: &mut SalesManager, plan: &SimulationPlan) -> StoreResult<u64> {
    let mut recorded = 0u64;
    for (index, name) in catalog.names().enumerate() {
        let count = plan.sales_for(index);
        for _ in 0..count {
            sales.process_sale(catalog, name)?;
        }
        debug!(name, count, "Simulated sales");
        recorded += u64::from(count);
    }

    info!(recorded, revenue = %sales.total_revenue(), "Sales simulation finished");
    Ok(recorded)
}

// =============================================================================
// Unit Tests
// =============================================================================
