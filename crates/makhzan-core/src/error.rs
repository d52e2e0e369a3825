//! # Error Types
//!
//! Domain-specific error types for makhzan-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  makhzan-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Draft/input validation failures                 │
//! │                                                                         │
//! │  makhzan-media errors                                                   │
//! │  └── MediaError       - Image decode / symbol encode failures           │
//! │                                                                         │
//! │  makhzan-store errors                                                   │
//! │  └── StoreError       - Snapshot read/write failures                    │
//! │                                                                         │
//! │  makhzan-scan errors                                                    │
//! │  └── CameraError / ScanError - Camera + session failures                │
//! │                                                                         │
//! │  makhzan-app errors                                                     │
//! │  └── AppError         - What the UI layer sees (classified)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → UI                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, barcode, field)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These represent business rule violations. They should be caught and
/// translated to user-friendly messages at the app boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - Record id doesn't exist in the catalog
    /// - Record was deleted before the operation ran
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The generator could not find a barcode unused by the catalog.
    ///
    /// ## When This Occurs
    /// Practically never: the payload space holds 900 million codes and the
    /// generator retries on collision. Hitting this means the random source
    /// is broken or the catalog is implausibly large.
    #[error("No unused barcode found after {attempts} attempts")]
    BarcodeExhausted { attempts: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a product draft doesn't meet requirements.
/// Used for early validation before any record is created.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "Product not found: abc-123");

        let err = CoreError::BarcodeExhausted { attempts: 32 };
        assert_eq!(err.to_string(), "No unused barcode found after 32 attempts");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
