//! # Domain Types
//!
//! Small value types shared by the product, catalog and sales modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    ProductId    │   │   ProductKind   │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  UUID v4        │   │  Game           │   │  bps (u32)      │       │
//! │  │  per entry      │   │  ("type" tag)   │   │  2500 = 25%     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  Genre: Action, Adventure, Fighting, Horror, Metroidvania, ...  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every catalog entry has:
//! - `ProductId`: UUID v4, assigned on insertion, never changes
//! - `name`: business key, unique within the catalog, can be renamed
//!
//! Sale records point at the `ProductId`, so a product's sales follow it
//! through a rename.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// Product Id
// =============================================================================

/// Identity of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// The kind discriminator persisted as `"type"` in catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductKind {
    Game,
}

impl ProductKind {
    /// The discriminator string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Game => "Game",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Game" => Ok(ProductKind::Game),
            _ => Err(format!("Invalid product type: {s}")),
        }
    }
}

// =============================================================================
// Genre
// =============================================================================

/// The fixed genre vocabulary for games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Fighting,
    Horror,
    Metroidvania,
    Platformer,
    Puzzle,
    Racing,
    #[serde(rename = "RPG")]
    RolePlaying,
    Roguelike,
    Shooter,
    Simulation,
    Sports,
    Strategy,
}

impl Genre {
    /// The whole vocabulary, in display order.
    pub const ALL: [Genre; 14] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Fighting,
        Genre::Horror,
        Genre::Metroidvania,
        Genre::Platformer,
        Genre::Puzzle,
        Genre::Racing,
        Genre::RolePlaying,
        Genre::Roguelike,
        Genre::Shooter,
        Genre::Simulation,
        Genre::Sports,
        Genre::Strategy,
    ];

    /// The wire spelling used in catalog files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Fighting => "Fighting",
            Genre::Horror => "Horror",
            Genre::Metroidvania => "Metroidvania",
            Genre::Platformer => "Platformer",
            Genre::Puzzle => "Puzzle",
            Genre::Racing => "Racing",
            Genre::RolePlaying => "RPG",
            Genre::Roguelike => "Roguelike",
            Genre::Shooter => "Shooter",
            Genre::Simulation => "Simulation",
            Genre::Sports => "Sports",
            Genre::Strategy => "Strategy",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = String;

    /// Exact, case-sensitive match against the wire spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount percentage in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01%. `2500` bps = 25%. Storing an integer keeps the
/// discount math in [`crate::money::Price::discounted`] exact. Fractional
/// percentages down to 0.01% are representable (`12.5%` = `1250` bps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// 100% in basis points.
    pub const MAX_BPS: u32 = 10_000;

    /// Creates a rate from basis points.
    ///
    /// Unchecked: use [`crate::validation::validate_discount_percentage`]
    /// for user input.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

/// `25%` for whole percentages, `12.5%` otherwise.
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}%", self.percentage())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
