//! # Lookup Resolution
//!
//! Turns a scanned (or typed) code into the matching catalog record.
//!
//! ## Match Policy
//! A record matches when its barcode equals the scanned code exactly, OR
//! contains it as a substring. The substring arm accommodates truncated
//! scans and manually typed fragments. First match in catalog order wins;
//! there is deliberately no stricter ambiguity resolution than "first".

use crate::types::Product;

/// Resolves a scanned or typed code against the catalog.
///
/// ## Guarantees
/// - pure read query, never mutates the catalog
/// - first match in catalog order (insertion order, newest first) wins
/// - an empty or whitespace-only code resolves to nothing, since every
///   barcode trivially contains the empty string
pub fn resolve<'a>(code: &str, products: &'a [Product]) -> Option<&'a Product> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    products
        .iter()
        .find(|p| p.barcode == code || p.barcode.contains(code))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImageData, ProductDraft};

    fn product(name: &str, barcode: &str) -> Product {
        Product::new(
            ProductDraft {
                name: name.to_string(),
                size: "M".to_string(),
                color: "Black".to_string(),
                ..ProductDraft::default()
            },
            barcode.to_string(),
            ImageData::new(vec![0xFF, 0xD8]),
        )
    }

    #[test]
    fn test_exact_match() {
        let catalog = vec![product("A", "ART-123456789"), product("B", "ART-987654321")];
        let found = resolve("ART-987654321", &catalog).unwrap();
        assert_eq!(found.name, "B");
    }

    #[test]
    fn test_substring_match_finds_truncated_scan() {
        // Scenario from the field: the scanner reads only the digits
        let catalog = vec![product("A", "ART-123456789")];
        let found = resolve("123456789", &catalog).unwrap();
        assert_eq!(found.name, "A");
    }

    #[test]
    fn test_first_match_in_catalog_order_wins() {
        // Both barcodes contain "1234"; the earlier record is returned.
        // Pins the first-in-order policy, not a preference for exact
        // matches.
        let catalog = vec![product("first", "ART-123400000"), product("second", "ART-991234000")];
        let found = resolve("1234", &catalog).unwrap();
        assert_eq!(found.name, "first");
    }

    #[test]
    fn test_exact_match_still_found_behind_substring_candidates() {
        let catalog = vec![
            product("container", "ART-123456789"),
            product("exact", "123456789"),
        ];
        // "container" comes first in catalog order and contains the code,
        // so current policy returns it even though "exact" equals the code.
        let found = resolve("123456789", &catalog).unwrap();
        assert_eq!(found.name, "container");
    }

    #[test]
    fn test_miss_on_empty_catalog() {
        assert!(resolve("ART-123456789", &[]).is_none());
    }

    #[test]
    fn test_miss_on_unknown_code() {
        let catalog = vec![product("A", "ART-123456789")];
        assert!(resolve("ART-000000000", &catalog).is_none());
    }

    #[test]
    fn test_empty_code_never_matches() {
        let catalog = vec![product("A", "ART-123456789")];
        assert!(resolve("", &catalog).is_none());
        assert!(resolve("   ", &catalog).is_none());
    }
}
