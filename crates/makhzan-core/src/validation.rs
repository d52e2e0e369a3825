//! # Validation Module
//!
//! Draft validation for product entry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Entry form (whatever renders it)                              │
//! │  ├── Required markers, numeric keyboards                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Field rules (required, bounds)                                     │
//! │  └── Runs before any record is created or image normalized              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Media layer                                                   │
//! │  └── Image decodability (a present-but-broken image fails there)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductDraft;
use crate::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates the pieces-per-dozen pack count.
///
/// ## Rules
/// - Must be positive (> 0); the form defaults it to 12
pub fn validate_units_per_dozen(units: u32) -> ValidationResult<()> {
    if units == 0 {
        return Err(ValidationError::MustBePositive {
            field: "unitsPerDozen".to_string(),
        });
    }

    Ok(())
}

/// Validates a size or color field (both share the same rules).
///
/// ## Rules
/// - Must not be empty; presets and free text are equally welcome,
///   no enumeration is enforced at storage
fn validate_choice_field(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a garment size.
pub fn validate_size(size: &str) -> ValidationResult<()> {
    validate_choice_field("size", size)
}

/// Validates a color name.
pub fn validate_color(color: &str) -> ValidationResult<()> {
    validate_choice_field("color", color)
}

/// Validates the free-text description.
///
/// ## Rules
/// - May be empty
/// - Must be at most 2000 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validation
// =============================================================================

/// Validates a whole draft before creation.
///
/// The image is only checked for presence here; whether the bytes decode as
/// a raster is the media layer's call.
pub fn validate_draft(draft: &ProductDraft) -> ValidationResult<()> {
    validate_name(&draft.name)?;
    validate_price_cents(draft.price_cents)?;
    validate_units_per_dozen(draft.units_per_dozen)?;
    validate_size(&draft.size)?;
    validate_color(&draft.color)?;
    validate_description(&draft.description)?;

    if draft.raw_image.is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Velvet evening dress".to_string(),
            price_cents: 12500,
            size: "M".to_string(),
            color: "Black".to_string(),
            units_per_dozen: 12,
            description: String::new(),
            raw_image: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Velvet evening dress").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(12500).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_units_per_dozen() {
        assert!(validate_units_per_dozen(12).is_ok());
        assert!(validate_units_per_dozen(1).is_ok());
        assert!(validate_units_per_dozen(0).is_err());
    }

    #[test]
    fn test_validate_draft_accepts_valid_input() {
        assert!(validate_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn test_validate_draft_requires_image() {
        let mut draft = valid_draft();
        draft.raw_image.clear();
        let err = validate_draft(&draft).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "image"));
    }

    #[test]
    fn test_validate_draft_requires_size_and_color() {
        let mut draft = valid_draft();
        draft.size = " ".to_string();
        assert!(validate_draft(&draft).is_err());

        let mut draft = valid_draft();
        draft.color = String::new();
        assert!(validate_draft(&draft).is_err());
    }
}
