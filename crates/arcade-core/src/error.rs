//! # Error Types
//!
//! Domain-specific error types for arcade-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  arcade-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog, discount and sale failures            │
//! │  └── ValidationError  - Field constraint violations                    │
//! │                                                                         │
//! │  arcade-store errors (separate crate)                                  │
//! │  └── StoreError       - File read/decode/write failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → console message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Taxonomy
//! | Kind           | Variant(s)                                        |
//! |----------------|---------------------------------------------------|
//! | ValidationError| `CoreError::Validation`                           |
//! | DuplicateKey   | `DuplicateProduct`, `DuplicateDiscount`           |
//! | NotFound       | `ProductNotFound`, `DiscountNotFound`             |
//! | InvalidField   | `InvalidField`                                    |
//! | InvalidRecord  | `InvalidRecord`                                   |
//! | EmptyResult    | `NoProductsFound`                                 |
//! | Overflow       | `RevenueOverflow`                                 |

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog, discount and sales errors.
///
/// Each operation returns these to its immediate caller. Only catalog import
/// catches them (per record) and keeps going.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog entry with this name.
    #[error("Product {0:?} not found")]
    ProductNotFound(String),

    /// A catalog entry with this name already exists.
    #[error("Product {0:?} already exists")]
    DuplicateProduct(String),

    /// No discount registered for this name.
    #[error("Discount for {0:?} not found")]
    DiscountNotFound(String),

    /// A discount for this name is already registered.
    ///
    /// ## When This Occurs
    /// Adding a second discount for the same product. The table never
    /// overwrites; remove the old discount first.
    #[error("Discount for {0:?} already added")]
    DuplicateDiscount(String),

    /// An update referenced an attribute the product does not have.
    #[error("{field} is not a valid attribute of {product:?}")]
    InvalidField { product: String, field: String },

    /// An imported record could not be mapped to a product kind.
    #[error("Invalid product record: {reason}")]
    InvalidRecord { reason: String },

    /// A listing matched nothing.
    #[error("No products found")]
    NoProductsFound,

    /// Recording a sale would push total revenue past what Money can hold.
    #[error("Sale of {0:?} would overflow total revenue")]
    RevenueOverflow(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidRecord error.
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        CoreError::InvalidRecord {
            reason: reason.into(),
        }
    }

    /// Returns true for the "missing name" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::ProductNotFound(_) | CoreError::DiscountNotFound(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// Returned by the validators in [`crate::validation`] and by every setter
/// on a product. A setter that returns one of these has not changed its
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., wrong JSON type, malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} contains values outside the allowed set: {rejected:?}")]
    NotAllowed { field: String, rejected: Vec<String> },
}

impl ValidationError {
    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("Okami".to_string());
        assert_eq!(err.to_string(), "Product \"Okami\" not found");

        let err = CoreError::InvalidField {
            product: "Okami".to_string(),
            field: "rating".to_string(),
        };
        assert_eq!(err.to_string(), "rating is not a valid attribute of \"Okami\"");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooShort {
            field: "developer".to_string(),
            min: 2,
        };
        assert_eq!(err.to_string(), "developer must be at least 2 characters");
        assert_eq!(err.field(), "developer");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_is_not_found() {
        assert!(CoreError::ProductNotFound("x".into()).is_not_found());
        assert!(CoreError::DiscountNotFound("x".into()).is_not_found());
        assert!(!CoreError::NoProductsFound.is_not_found());
    }
}
