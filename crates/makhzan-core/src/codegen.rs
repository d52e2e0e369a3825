//! # Barcode Payload Generation
//!
//! Produces the textual identifier encoded into each product's symbol.
//!
//! ## Payload Shape
//! ```text
//! ART-482917365
//! └┬─┘└───┬───┘
//!  │      └── 9 decimal digits, uniform in 100_000_000..=999_999_999
//!  └───────── fixed article prefix
//! ```
//!
//! The whole alphabet (uppercase letters, digits, hyphen) sits inside
//! Code 128 character set B, so the generator can never emit a payload the
//! symbol encoder rejects.
//!
//! ## Uniqueness
//! `generate` is probabilistic: 900 million codes, no counter, no state
//! between calls. [`generate_distinct`] layers a caller-supplied taken-check
//! on top for catalog-level uniqueness.

use rand::Rng;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Constants
// =============================================================================

/// Fixed prefix for every generated payload ("article").
pub const BARCODE_PREFIX: &str = "ART-";

/// Inclusive lower bound of the numeric payload space (keeps 9 digits fixed-width).
pub const CODE_MIN: u64 = 100_000_000;

/// Inclusive upper bound of the numeric payload space.
pub const CODE_MAX: u64 = 999_999_999;

/// Retry budget for [`generate_distinct`].
const MAX_ATTEMPTS: u32 = 32;

// =============================================================================
// Generation
// =============================================================================

/// Generates a barcode payload: `ART-` followed by exactly nine digits.
///
/// Each call is independent; no sequence or counter state is kept. Global
/// uniqueness is probabilistic only (see [`generate_distinct`]).
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", BARCODE_PREFIX, rng.gen_range(CODE_MIN..=CODE_MAX))
}

/// Generates a payload not already taken, per the caller's predicate.
///
/// ## Usage
/// The app layer passes a closure over the loaded catalog:
/// ```rust
/// use makhzan_core::codegen::generate_distinct;
///
/// let existing = ["ART-111111111".to_string()];
/// let code = generate_distinct(&mut rand::thread_rng(), |c| {
///     existing.iter().any(|e| e == c)
/// })
/// .unwrap();
/// assert_ne!(code, "ART-111111111");
/// ```
///
/// ## Errors
/// `CoreError::BarcodeExhausted` after 32 collisions in a row, which in a
/// 900-million-code space means something other than luck is wrong.
pub fn generate_distinct<R, F>(rng: &mut R, is_taken: F) -> CoreResult<String>
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let code = generate(rng);
        if !is_taken(&code) {
            return Ok(code);
        }
    }
    Err(CoreError::BarcodeExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Checks that a payload stays inside the symbology alphabet we encode with
/// (printable ASCII, Code 128 character set B).
///
/// Generated payloads always pass; the symbol encoder uses this as its
/// pre-check so codes arriving from outside the generator (imports, manual
/// entry) are rejected with a clear message.
pub fn payload_encodable(payload: &str) -> bool {
    !payload.is_empty() && payload.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

// =============================================================================
// Unit Tests
// =============================================================================
