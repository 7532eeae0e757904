//! # Products
//!
//! The product entity and its catalog-file record form.
//!
//! ## Two Shapes of a Product
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   catalog file (JSON)            ProductRecord            Product       │
//! │   ───────────────────            ─────────────            ───────       │
//! │   {                              raw, unchecked           validated,    │
//! │     "type": "Game",   ─────►     strings + Price ─────►   typed fields  │
//! │     "name": "Okami",             (serde)          try_    (Price,       │
//! │     "price": 19.99,                               from    Genre,        │
//! │     ...                                                   NaiveDate)    │
//! │   }                  ◄─────      to_record()     ◄─────                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Game` can only be obtained through [`Game::new`] or
//! [`Product::from_record`], and its fields only change through setters that
//! validate first. An invalid value never lands in a field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Price;
use crate::types::{Genre, ProductKind};
use crate::validation::{
    validate_developer, validate_genre, validate_name, validate_price, validate_price_json,
    validate_publisher, validate_release_date, ValidationResult,
};
use crate::RELEASE_DATE_FORMAT;

// =============================================================================
// Game
// =============================================================================

/// A video game for sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    name: String,
    price: Price,
    genre: Vec<Genre>,
    developer: String,
    publisher: String,
    release_date: NaiveDate,
}

impl Game {
    /// Attribute names accepted by [`Product::set_field`], in record order.
    pub const ATTRIBUTES: [&'static str; 6] = [
        "name",
        "price",
        "genre",
        "developer",
        "publisher",
        "release_date",
    ];

    /// Creates a game, validating every field.
    ///
    /// ## Example
    /// ```rust
    /// use arcade_core::money::Price;
    /// use arcade_core::product::Game;
    /// use arcade_core::types::Genre;
    ///
    /// let game = Game::new(
    ///     "The Talos Principle",
    ///     Price::new(3999, 2),
    ///     vec![Genre::Puzzle, Genre::Adventure],
    ///     "Croteam",
    ///     "Devolver Digital",
    ///     "2014/12/11",
    /// )
    /// .unwrap();
    /// assert_eq!(game.release_date_string(), "2014/12/11");
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: impl Into<Price>,
        genre: Vec<Genre>,
        developer: impl Into<String>,
        publisher: impl Into<String>,
        release_date: &str,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let price = price.into();
        let developer = developer.into();
        let publisher = publisher.into();

        validate_name(&name)?;
        validate_price(price)?;
        validate_developer(&developer)?;
        validate_publisher(&publisher)?;
        let release_date = validate_release_date(release_date)?;

        Ok(Game {
            name,
            price,
            genre,
            developer,
            publisher,
            release_date,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn genre(&self) -> &[Genre] {
        &self.genre
    }

    pub fn developer(&self) -> &str {
        &self.developer
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// The release date in catalog format (`yyyy/mm/dd`).
    pub fn release_date_string(&self) -> String {
        self.release_date.format(RELEASE_DATE_FORMAT).to_string()
    }

    // -------------------------------------------------------------------------
    // Validating Setters
    // -------------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_price(&mut self, price: impl Into<Price>) -> ValidationResult<()> {
        let price = price.into();
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Every `Genre` is in the vocabulary, so any list is accepted.
    pub fn set_genre(&mut self, genre: Vec<Genre>) {
        self.genre = genre;
    }

    pub fn set_developer(&mut self, developer: impl Into<String>) -> ValidationResult<()> {
        let developer = developer.into();
        validate_developer(&developer)?;
        self.developer = developer;
        Ok(())
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) -> ValidationResult<()> {
        let publisher = publisher.into();
        validate_publisher(&publisher)?;
        self.publisher = publisher;
        Ok(())
    }

    pub fn set_release_date(&mut self, release_date: &str) -> ValidationResult<()> {
        self.release_date = validate_release_date(release_date)?;
        Ok(())
    }

    /// Applies one JSON-valued attribute update.
    ///
    /// `Ok(false)` means the attribute does not exist on a game.
    fn set_json_field(&mut self, field: &str, value: &Value) -> ValidationResult<bool> {
        match field {
            "name" => self.set_name(json_str(field, value)?)?,
            "price" => self.set_price(validate_price_json(value)?)?,
            "genre" => {
                let names = value
                    .as_array()
                    .ok_or_else(|| ValidationError::invalid_format(field, "must be a list"))?
                    .iter()
                    .map(|v| json_str(field, v))
                    .collect::<ValidationResult<Vec<&str>>>()?;
                self.set_genre(validate_genre(&names)?);
            }
            "developer" => self.set_developer(json_str(field, value)?)?,
            "publisher" => self.set_publisher(json_str(field, value)?)?,
            "release_date" => self.set_release_date(json_str(field, value)?)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn json_str<'a>(field: &str, value: &'a Value) -> ValidationResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::invalid_format(field, "must be a string"))
}

// =============================================================================
// Product
// =============================================================================

/// Any product the store can sell.
///
/// A closed set of kinds; adding a kind means adding a variant here and in
/// [`ProductRecord`].
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    Game(Game),
}

impl Product {
    /// The kind discriminator.
    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Game(_) => ProductKind::Game,
        }
    }

    /// Business key.
    pub fn name(&self) -> &str {
        match self {
            Product::Game(game) => game.name(),
        }
    }

    pub fn price(&self) -> Price {
        match self {
            Product::Game(game) => game.price(),
        }
    }

    /// Attribute names this product accepts in an update.
    pub fn attributes(&self) -> &'static [&'static str] {
        match self {
            Product::Game(_) => &Game::ATTRIBUTES,
        }
    }

    /// Returns the game if this product is one.
    pub fn as_game(&self) -> Option<&Game> {
        match self {
            Product::Game(game) => Some(game),
        }
    }

    /// Sets one attribute from a JSON value.
    ///
    /// ## Errors
    /// - `InvalidField` if the attribute does not exist for this kind
    /// - `Validation` if the value has the wrong type or fails its rule
    ///
    /// On error the product is unchanged.
    pub fn set_field(&mut self, field: &str, value: &Value) -> CoreResult<()> {
        let product = self.name().to_string();
        let applied = match self {
            Product::Game(game) => game.set_json_field(field, value)?,
        };

        if !applied {
            return Err(CoreError::InvalidField {
                product,
                field: field.to_string(),
            });
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Record Conversion
    // -------------------------------------------------------------------------

    /// Converts to the kind-tagged catalog record.
    pub fn to_record(&self) -> ProductRecord {
        match self {
            Product::Game(game) => ProductRecord::Game(GameRecord {
                name: game.name.clone(),
                price: game.price,
                genre: game.genre.iter().map(|g| g.as_str().to_string()).collect(),
                developer: game.developer.clone(),
                publisher: game.publisher.clone(),
                release_date: game.release_date_string(),
            }),
        }
    }

    /// Builds a product from a record, validating every field.
    pub fn from_record(record: ProductRecord) -> CoreResult<Self> {
        match record {
            ProductRecord::Game(record) => Ok(Product::Game(Game::try_from(record)?)),
        }
    }
}

impl From<Game> for Product {
    fn from(game: Game) -> Self {
        Product::Game(game)
    }
}

// =============================================================================
// Product Record (catalog file format)
// =============================================================================

/// A product as stored in a catalog file.
///
/// ## Format
/// ```json
/// {
///     "type": "Game",
///     "name": "The Talos Principle",
///     "price": 39.99,
///     "genre": ["Puzzle", "Adventure"],
///     "developer": "Croteam",
///     "publisher": "Devolver Digital",
///     "release_date": "2014/12/11"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProductRecord {
    Game(GameRecord),
}

impl ProductRecord {
    /// Parses one element of a catalog file.
    ///
    /// The discriminator is checked before the attributes, so an unknown kind
    /// is reported as such rather than as a missing field.
    pub fn from_value(value: Value) -> CoreResult<Self> {
        let kind = match value.get("type") {
            Some(Value::String(kind)) => kind
                .parse::<ProductKind>()
                .map_err(CoreError::invalid_record)?,
            Some(other) => {
                return Err(CoreError::invalid_record(format!(
                    "product type must be a string, got {other}"
                )))
            }
            None => return Err(CoreError::invalid_record("missing product type")),
        };

        serde_json::from_value(value)
            .map_err(|e| CoreError::invalid_record(format!("{kind} record: {e}")))
    }

    /// Product name, without validating anything.
    pub fn name(&self) -> &str {
        match self {
            ProductRecord::Game(record) => &record.name,
        }
    }
}

/// Raw game attributes, exactly as they appear in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,
    pub price: Price,
    pub genre: Vec<String>,
    pub developer: String,
    pub publisher: String,
    pub release_date: String,
}

impl TryFrom<GameRecord> for Game {
    type Error = ValidationError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let genre = validate_genre(&record.genre)?;
        Game::new(
            record.name,
            record.price,
            genre,
            record.developer,
            record.publisher,
            &record.release_date,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use serde_json::json;

    fn talos() -> Game {
        Game::new(
            "The Talos Principle",
            Money::from_cents(3999),
            vec![Genre::Puzzle, Genre::Adventure],
            "Croteam",
            "Devolver Digital",
            "2014/12/11",
        )
        .unwrap()
    }

    #[test]
    fn test_new_game_validates() {
        let game = talos();
        assert_eq!(game.name(), "The Talos Principle");
        assert_eq!(game.price(), Price::new(3999, 2));
        assert_eq!(game.release_date_string(), "2014/12/11");

        let err = Game::new(
            "Bad Date",
            Money::zero(),
            vec![],
            "Studio",
            "Publisher",
            "2023/02/30",
        )
        .unwrap_err();
        assert_eq!(err.field(), "release_date");

        let repeated = Game::new(
            "Repeated Genre",
            Money::zero(),
            vec![Genre::Puzzle, Genre::Puzzle],
            "Studio",
            "Publisher",
            "2023/02/28",
        )
        .unwrap();
        assert_eq!(repeated.genre(), &[Genre::Puzzle, Genre::Puzzle]);

        assert!(Game::new("   ", Money::zero(), vec![], "Studio", "Publisher", "2023/02/28").is_ok());

        let err = Game::new(
            "Too Expensive",
            Price::from_f64(5e16).unwrap(),
            vec![],
            "Studio",
            "Publisher",
            "2023/02/28",
        )
        .unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_invalid_setter_leaves_field_unchanged() {
        let mut game = talos();

        assert!(game.set_price(Money::from_cents(-1)).is_err());
        assert_eq!(game.price(), Price::new(3999, 2));

        assert!(game.set_developer("42").is_err());
        assert_eq!(game.developer(), "Croteam");

        assert!(game.set_release_date("2014/13/11").is_err());
        assert_eq!(game.release_date_string(), "2014/12/11");

        assert!(game.set_publisher("Devolver Digital").is_ok());
    }

    #[test]
    fn test_set_field_from_json() {
        let mut product = Product::from(talos());

        product.set_field("price", &json!(19.99)).unwrap();
        assert_eq!(product.price(), Price::new(1999, 2));

        product.set_field("genre", &json!(["Puzzle"])).unwrap();
        assert_eq!(product.as_game().unwrap().genre(), &[Genre::Puzzle]);

        let err = product.set_field("rating", &json!(5)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidField { .. }));

        let err = product.set_field("price", &json!("cheap")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::InvalidFormat { .. })));
        assert_eq!(product.price(), Price::new(1999, 2));

        product.set_field("price", &json!(9.999)).unwrap();
        assert_eq!(product.price().to_string(), "9.999");

        let err = product.set_field("genre", &json!(["Puzzle", 7])).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_record_round_trip() {
        let product = Product::from(talos());
        let record = product.to_record();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Game",
                "name": "The Talos Principle",
                "price": 39.99,
                "genre": ["Puzzle", "Adventure"],
                "developer": "Croteam",
                "publisher": "Devolver Digital",
                "release_date": "2014/12/11",
            })
        );

        let parsed = ProductRecord::from_value(value).unwrap();
        assert_eq!(Product::from_record(parsed).unwrap(), product);
    }

    #[test]
    fn test_record_keeps_price_digits() {
        for (given, written) in [(json!(9.999), "9.999"), (json!(40), "40"), (json!(40.0), "40.0")] {
            let value = json!({
                "type": "Game",
                "name": "Exact",
                "price": given,
                "genre": ["Puzzle", "Puzzle"],
                "developer": "Studio",
                "publisher": "Publisher",
                "release_date": "2020/01/01",
            });
            let record = ProductRecord::from_value(value.clone()).unwrap();
            let product = Product::from_record(record).unwrap();

            let exported = serde_json::to_value(product.to_record()).unwrap();
            assert_eq!(exported, value);
            assert_eq!(exported["price"].to_string(), written);
        }
    }

    #[test]
    fn test_record_from_value_rejects_bad_kinds() {
        let err = ProductRecord::from_value(json!({"type": "Unknown", "name": "X"})).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { .. }));

        let err = ProductRecord::from_value(json!({"name": "X"})).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { .. }));

        let err = ProductRecord::from_value(json!({"type": 3})).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { .. }));

        // Known kind with missing attributes
        let err = ProductRecord::from_value(json!({"type": "Game", "name": "X"})).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { .. }));
    }

    #[test]
    fn test_record_with_invalid_genre_fails_validation() {
        let record = ProductRecord::Game(GameRecord {
            name: "Mystery".to_string(),
            price: Price::new(999, 2),
            genre: vec!["Dating Sim".to_string()],
            developer: "Studio".to_string(),
            publisher: "Publisher".to_string(),
            release_date: "2020/01/01".to_string(),
        });
        let err = Product::from_record(record).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::NotAllowed { .. })
        ));
    }
}
