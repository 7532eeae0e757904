//! # Validation Module
//!
//! Field validators for products and discounts.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Game::new(...)            ── every field, before the value exists     │
//! │  Game::set_*(...)          ── one field, before it is replaced         │
//! │  Catalog::update(...)      ── every field, on a scratch copy           │
//! │  DiscountTable::add(...)   ── percentage range                         │
//! │  SalesLedger::record(...)  ── price paid is not negative               │
//! │                                                                         │
//! │  A validator either returns Ok (and sometimes the parsed value) or a   │
//! │  ValidationError naming the field. Nothing is mutated on failure.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use arcade_core::validation::{validate_name, validate_release_date};
//!
//! assert!(validate_name("Okami").is_ok());
//! assert!(validate_release_date("2023/02/28").is_ok());
//! assert!(validate_release_date("2023/02/30").is_err());
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::{Money, Price};
use crate::types::{DiscountRate, Genre};
use crate::{MAX_NAME_CHARS, MAX_PRICE, MAX_STUDIO_CHARS, MIN_STUDIO_CHARS, RELEASE_DATE_FORMAT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
///
/// ## Example
/// ```rust
/// use arcade_core::validation::validate_name;
///
/// assert!(validate_name("Chrono Trigger").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name(&"A".repeat(65)).is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_CHARS,
        });
    }

    Ok(())
}

/// Validates a developer studio name.
///
/// ## Rules
/// - 2 to 64 characters
/// - Must not consist of digits only
pub fn validate_developer(developer: &str) -> ValidationResult<()> {
    validate_studio_length("developer", developer)?;

    if developer.chars().all(char::is_numeric) {
        return Err(ValidationError::invalid_format(
            "developer",
            "cannot be numeric",
        ));
    }

    Ok(())
}

/// Validates a publisher name.
///
/// ## Rules
/// - 2 to 64 characters
/// - Only ASCII letters, digits, whitespace and dots
///
/// ## Example
/// ```rust
/// use arcade_core::validation::validate_publisher;
///
/// assert!(validate_publisher("Devolver Digital").is_ok());
/// assert!(validate_publisher("Thekla Inc.").is_ok());
/// assert!(validate_publisher("Square-Enix").is_err());
/// ```
pub fn validate_publisher(publisher: &str) -> ValidationResult<()> {
    validate_studio_length("publisher", publisher)?;

    if !publisher
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || c == '.')
    {
        return Err(ValidationError::invalid_format(
            "publisher",
            "cannot contain special characters except spaces and dots",
        ));
    }

    Ok(())
}

fn validate_studio_length(field: &str, value: &str) -> ValidationResult<()> {
    let len = value.chars().count();

    if len < MIN_STUDIO_CHARS {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min: MIN_STUDIO_CHARS,
        });
    }

    if len > MAX_STUDIO_CHARS {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_STUDIO_CHARS,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a release date and returns it parsed.
///
/// ## Rules
/// - Exactly `yyyy/mm/dd` (four, two and two ASCII digits)
/// - Must be a real calendar date
///
/// ```text
/// "2023/02/28"  ──► Ok(2023-02-28)
/// "2023/02/30"  ──► Err: not a valid date
/// "2023/2/28"   ──► Err: wrong shape
/// "2023-02-28"  ──► Err: wrong shape
/// ```
pub fn validate_release_date(release_date: &str) -> ValidationResult<NaiveDate> {
    if !has_release_date_shape(release_date) {
        return Err(ValidationError::invalid_format(
            "release_date",
            "must be in the format yyyy/mm/dd",
        ));
    }

    NaiveDate::parse_from_str(release_date, RELEASE_DATE_FORMAT).map_err(|_| {
        ValidationError::invalid_format("release_date", "must be a valid date")
    })
}

fn has_release_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Between 0 and [`MAX_PRICE`] inclusive
/// - Zero is allowed (free games)
/// - Any number of decimal places; only the price paid is rounded
///
/// ## Example
/// ```rust
/// use arcade_core::money::Price;
/// use arcade_core::validation::validate_price;
///
/// assert!(validate_price(Price::new(9999, 3)).is_ok());
/// assert!(validate_price(Price::new(-1, 2)).is_err());
/// ```
pub fn validate_price(price: Price) -> ValidationResult<()> {
    if price.is_negative() || price.as_decimal() > Decimal::from(MAX_PRICE) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE,
        });
    }

    Ok(())
}

/// Validates a price read from a JSON value.
pub fn validate_price_json(value: &serde_json::Value) -> ValidationResult<Price> {
    let price = Price::from_json(value)
        .ok_or_else(|| ValidationError::invalid_format("price", "must be a finite number"))?;
    validate_price(price)?;
    Ok(price)
}

/// Validates the amount recorded for a sale.
pub fn validate_price_paid(price_paid: Money) -> ValidationResult<()> {
    if price_paid.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price_paid".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount percentage and converts it to a rate.
///
/// ## Rules
/// - Between 0 and 100 inclusive
/// - Resolution is 0.01% (rounded to the nearest basis point)
pub fn validate_discount_percentage(percentage: f64) -> ValidationResult<DiscountRate> {
    if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
        return Err(ValidationError::OutOfRange {
            field: "discount percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(DiscountRate::from_bps((percentage * 100.0).round() as u32))
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates genre names and returns them as the Genre vocabulary.
///
/// ## Rules
/// - Every name must be in the vocabulary (exact spelling)
/// - Empty is allowed
///
/// Order and repeats are kept as given, so a genre list survives an
/// export/import cycle unchanged.
pub fn validate_genre<S: AsRef<str>>(names: &[S]) -> ValidationResult<Vec<Genre>> {
    let mut rejected = Vec::new();
    let mut genres = Vec::with_capacity(names.len());

    for name in names {
        match name.as_ref().parse::<Genre>() {
            Ok(genre) => genres.push(genre),
            Err(unknown) => rejected.push(unknown),
        }
    }

    if !rejected.is_empty() {
        return Err(ValidationError::NotAllowed {
            field: "genre".to_string(),
            rejected,
        });
    }

    Ok(genres)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Okami").is_ok());
        assert!(validate_name(&"A".repeat(64)).is_ok());
        // 64 multi-byte characters still fit
        assert!(validate_name(&"é".repeat(64)).is_ok());

        assert!(matches!(
            validate_name(""),
            Err(ValidationError::Required { .. })
        ));
        // Only the empty string is empty
        assert!(validate_name("   ").is_ok());
        assert!(matches!(
            validate_name(&"A".repeat(65)),
            Err(ValidationError::TooLong { max: 64, .. })
        ));
    }

    #[test]
    fn test_validate_developer() {
        assert!(validate_developer("Croteam").is_ok());
        assert!(validate_developer("2K").is_ok());
        assert!(validate_developer("id").is_ok());

        assert!(validate_developer("X").is_err());
        assert!(validate_developer(&"D".repeat(65)).is_err());
        assert!(matches!(
            validate_developer("1234"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_publisher() {
        assert!(validate_publisher("Devolver Digital").is_ok());
        assert!(validate_publisher("Thekla Inc.").is_ok());
        assert!(validate_publisher("505 Games").is_ok());

        assert!(validate_publisher("A").is_err());
        assert!(validate_publisher("Square-Enix").is_err());
        assert!(validate_publisher("Bandai & Namco").is_err());
    }

    #[test]
    fn test_validate_release_date() {
        let date = validate_release_date("2023/02/28").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());

        assert!(validate_release_date("2024/02/29").is_ok()); // leap year
        assert!(validate_release_date("2023/02/30").is_err());
        assert!(validate_release_date("2023/02/29").is_err());
        assert!(validate_release_date("2023/13/01").is_err());
        assert!(validate_release_date("2023/2/28").is_err());
        assert!(validate_release_date("2023-02-28").is_err());
        assert!(validate_release_date("").is_err());
        assert!(validate_release_date("2023/02/28 ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Price::new(0, 0)).is_ok());
        assert!(validate_price(Price::new(3999, 2)).is_ok());
        assert!(validate_price(Price::new(MAX_PRICE, 0)).is_ok());
        assert!(validate_price(Price::new(-1, 2)).is_err());
        assert!(matches!(
            validate_price(Price::new(MAX_PRICE * 10 + 1, 1)),
            Err(ValidationError::OutOfRange { .. })
        ));

        assert_eq!(validate_price_json(&serde_json::json!(9.999)).unwrap(), Price::new(9999, 3));
        assert!(validate_price_json(&serde_json::json!(5e16)).is_err());
        assert!(validate_price_json(&serde_json::json!(-0.01)).is_err());
        assert!(validate_price_json(&serde_json::json!("9.99")).is_err());

        assert!(validate_price_paid(Money::zero()).is_ok());
        assert!(validate_price_paid(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_discount_percentage() {
        assert_eq!(validate_discount_percentage(25.0).unwrap().bps(), 2500);
        assert_eq!(validate_discount_percentage(0.0).unwrap().bps(), 0);
        assert_eq!(validate_discount_percentage(100.0).unwrap().bps(), 10000);
        assert_eq!(validate_discount_percentage(12.5).unwrap().bps(), 1250);

        assert!(validate_discount_percentage(-1.0).is_err());
        assert!(validate_discount_percentage(100.5).is_err());
        assert!(validate_discount_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_genre() {
        let genres = validate_genre(&["Puzzle", "Adventure"]).unwrap();
        assert_eq!(genres, vec![Genre::Puzzle, Genre::Adventure]);

        let empty: [&str; 0] = [];
        assert!(validate_genre(&empty).unwrap().is_empty());

        match validate_genre(&["Puzzle", "Dating Sim", "Idle"]) {
            Err(ValidationError::NotAllowed { rejected, .. }) => {
                assert_eq!(rejected, vec!["Dating Sim".to_string(), "Idle".to_string()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert_eq!(
            validate_genre(&["Puzzle", "Puzzle"]).unwrap(),
            vec![Genre::Puzzle, Genre::Puzzle]
        );
    }
}
