//! # Money Module
//!
//! Two monetary types:
//! - [`Price`]: a catalog price, kept exactly as it was given
//! - [`Money`]: an amount actually paid, in integer cents
//!
//! ## Why Two Types?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog file            Price (exact decimal)        Money (cents)     │
//! │  ────────────            ─────────────────────        ─────────────     │
//! │  "price": 9.999   ─────► 9.999            ─────────►  1000              │
//! │  "price": 40      ─────► 40               discounted  (rounded once,    │
//! │                   ◄───── written back as given        half up)          │
//! │                                                                         │
//! │  Summing thousands of discounted f64 prices drifts:                     │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │  so the ledger sums exact integer cents instead.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use arcade_core::money::{Money, Price};
//! use arcade_core::types::DiscountRate;
//!
//! let price = Price::new(10000, 2); // 100.00
//! let rate = DiscountRate::from_bps(2500); // 25%
//! assert_eq!(price.discounted(rate), Some(Money::from_cents(7500)));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::types::DiscountRate;

// =============================================================================
// Price Type
// =============================================================================

/// A catalog price.
///
/// Holds the decimal value and scale it was created with, so `9.999` stays
/// `9.999` and an integer `40` is written back as `40`, not `40.0`.
/// Comparison is numeric (`19.9 == 19.90`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a mantissa and a decimal scale.
    ///
    /// Panics if `scale` is greater than 28.
    ///
    /// ## Example
    /// ```rust
    /// use arcade_core::money::Price;
    ///
    /// assert_eq!(Price::new(3999, 2).to_string(), "39.99");
    /// assert_eq!(Price::new(40, 0).to_string(), "40");
    /// ```
    pub fn new(num: i64, scale: u32) -> Self {
        Price(Decimal::new(num, scale))
    }

    /// Converts a JSON float.
    ///
    /// Uses the shortest decimal that reads back as `value`, which is the
    /// digits the number was written with. A whole float keeps one decimal
    /// place so it is written back as a float. `None` for NaN, infinities and
    /// values outside the decimal range.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let mut decimal = Decimal::from_str(&value.to_string()).ok()?;
        if decimal.scale() == 0 {
            decimal.rescale(1);
        }
        Some(Price(decimal))
    }

    /// Reads a price from a JSON value.
    ///
    /// `None` if the value is not a number or cannot be represented.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let serde_json::Value::Number(number) = value else {
            return None;
        };
        if let Some(units) = number.as_u64() {
            Some(Price(Decimal::from(units)))
        } else if let Some(units) = number.as_i64() {
            Some(Price(Decimal::from(units)))
        } else {
            Price::from_f64(number.as_f64()?)
        }
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// The price after `rate`, rounded half up to the cent.
    ///
    /// `None` if the result does not fit in [`Money`].
    ///
    /// ## Example
    /// ```rust
    /// use arcade_core::money::Price;
    /// use arcade_core::types::DiscountRate;
    ///
    /// // 19.99 at 50% off = 9.995 → 10.00
    /// let paid = Price::new(1999, 2).discounted(DiscountRate::from_bps(5000));
    /// assert_eq!(paid.map(|m| m.cents()), Some(1000));
    /// ```
    pub fn discounted(&self, rate: DiscountRate) -> Option<Money> {
        let remaining = DiscountRate::MAX_BPS.saturating_sub(rate.bps());
        let factor = Decimal::new(i64::from(remaining), 4);
        let paid = self
            .0
            .checked_mul(factor)?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        paid.checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Money::from_cents)
    }

    pub(crate) fn as_decimal(&self) -> Decimal {
        self.0
    }
}

/// An exact cents value, at scale 2 (`Money::from_cents(3999)` is `39.99`).
impl From<Money> for Price {
    fn from(money: Money) -> Self {
        Price::new(money.cents(), 2)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Whole prices are written as JSON integers, everything else as the
/// shortest float with the same digits.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.scale() == 0 {
            if let Some(units) = self.0.to_u64() {
                return serializer.serialize_u64(units);
            }
            if let Some(units) = self.0.to_i64() {
                return serializer.serialize_i64(units);
            }
        }

        let value = f64::from_str(&self.0.to_string()).map_err(S::Error::custom)?;
        serializer.serialize_f64(value)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Price, E> {
        Ok(Price(Decimal::from(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Price, E> {
        Ok(Price(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Price, E> {
        Price::from_f64(value).ok_or_else(|| E::custom(format!("price {value} is out of range")))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: validation (not the type) rejects negative amounts
/// - **Single field tuple struct**: zero-cost wrapper over i64
/// - **Checked totals**: the ledger accumulates with [`Money::checked_add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use arcade_core::money::Money;
    ///
    /// let price = Money::from_cents(3999); // $39.99
    /// assert_eq!(price.cents(), 3999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that returns `None` instead of overflowing.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Formats as a plain two-decimal number (`"1234.50"`), for tables.
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable format with a currency sign (`$10.99`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Revenue totals are sums over ledger records.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
