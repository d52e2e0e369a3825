//! # Symbol Encoding
//!
//! Wraps the third-party Code 128 encoder behind a small contract type so
//! the symbology library stays replaceable. The wrapper exposes the symbol
//! as *module runs* (a 0/1 sequence, one entry per module) and leaves all
//! rasterization decisions to the caller: the label renderer and the tests
//! both draw from the same runs, which is what makes rendering
//! deterministic: the same payload always yields the same module sequence.
//!
//! ## Symbology Choice
//! Code 128, character set B: encodes the full generated payload alphabet
//! (uppercase letters, digits, hyphen) compactly, variable length, with the
//! symbology's own modulo-103 checksum.

use barcoders::sym::code128::Code128;
use tracing::trace;

use makhzan_core::codegen::payload_encodable;

use crate::error::{MediaError, MediaResult};

/// barcoders selects the Code 128 character set via a Unicode prefix;
/// U+0181 selects set B (full printable ASCII).
const CHARSET_B: char = '\u{0181}';

// =============================================================================
// Symbol
// =============================================================================

/// An encoded 1-D symbol: the payload plus its module runs.
///
/// Each entry is one module: 1 = bar, 0 = space. Quiet zones are not
/// included; renderers add their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    payload: String,
    modules: Vec<u8>,
}

impl Symbol {
    /// The payload this symbol encodes.
    #[inline]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Module runs, one entry per module (1 = bar, 0 = space).
    #[inline]
    pub fn modules(&self) -> &[u8] {
        &self.modules
    }

    /// Symbol width in modules.
    #[inline]
    pub fn width(&self) -> usize {
        self.modules.len()
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Encodes a payload as a Code 128 (set B) symbol.
///
/// ## Errors
/// [`MediaError::Symbol`] when the payload contains characters outside the
/// symbology alphabet or is empty. Payloads from the code generator always
/// succeed.
pub fn encode(payload: &str) -> MediaResult<Symbol> {
    // The encoder's charset prefix lives outside printable ASCII, so any
    // non-ASCII payload character would be misread as a control sequence.
    // Reject up front with a clearer message.
    if !payload_encodable(payload) {
        return Err(MediaError::Symbol {
            payload: payload.to_string(),
            reason: "payload must be non-empty printable ASCII".to_string(),
        });
    }

    let sym = Code128::new(format!("{CHARSET_B}{payload}")).map_err(|e| MediaError::Symbol {
        payload: payload.to_string(),
        reason: e.to_string(),
    })?;

    let modules = sym.encode();
    trace!(payload, width = modules.len(), "Encoded symbol");

    Ok(Symbol {
        payload: payload.to_string(),
        modules,
    })
}

// =============================================================================
// Rasterization
// =============================================================================

/// Rasterizes a symbol into a grayscale bitmap (bars black on white),
/// with a quiet zone on every side.
///
/// `module_width` is the printed width of one module in pixels; Code 128
/// readers want a quiet zone of at least 10 modules, so pass at least
/// `10 * module_width` for anything meant to be scanned.
pub fn rasterize(symbol: &Symbol, module_width: u32, height: u32, quiet_zone: u32) -> image::GrayImage {
    let width = symbol.width() as u32 * module_width + 2 * quiet_zone;
    let total_height = height + 2 * quiet_zone;

    let mut img = image::GrayImage::from_pixel(width, total_height, image::Luma([255u8]));
    for (i, module) in symbol.modules().iter().enumerate() {
        if *module == 1 {
            let x0 = quiet_zone + i as u32 * module_width;
            for x in x0..x0 + module_width {
                for y in quiet_zone..quiet_zone + height {
                    img.put_pixel(x, y, image::Luma([0u8]));
                }
            }
        }
    }
    img
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode("ART-123456789").unwrap();
        let b = encode("ART-123456789").unwrap();
        assert_eq!(a.modules(), b.modules());
        assert_eq!(a.payload(), "ART-123456789");
    }

    #[test]
    fn test_modules_are_binary() {
        let sym = encode("ART-987654321").unwrap();
        assert!(!sym.modules().is_empty());
        assert!(sym.modules().iter().all(|m| *m == 0 || *m == 1));
        // Code 128 symbols start with a bar and end with a bar
        assert_eq!(sym.modules()[0], 1);
        assert_eq!(*sym.modules().last().unwrap(), 1);
    }

    #[test]
    fn test_distinct_payloads_give_distinct_symbols() {
        let a = encode("ART-111111111").unwrap();
        let b = encode("ART-222222222").unwrap();
        assert_ne!(a.modules(), b.modules());
    }

    #[test]
    fn test_non_ascii_payload_is_rejected() {
        let err = encode("caf\u{00e9}").unwrap_err();
        assert!(matches!(err, MediaError::Symbol { .. }));
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(encode("").is_err());
    }

    #[test]
    fn test_rasterize_geometry() {
        let sym = encode("ART-123456789").unwrap();
        let img = rasterize(&sym, 2, 60, 20);
        assert_eq!(img.width(), sym.width() as u32 * 2 + 40);
        assert_eq!(img.height(), 100);
        // corners sit in the quiet zone
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
        // first module is a bar
        assert_eq!(img.get_pixel(20, 50).0[0], 0);
    }
}
