//! # Frame Decoding
//!
//! Per-frame symbol detection. A decoder answers one question per frame:
//! did this frame contain a readable barcode, and if so what was its text.
//!
//! Detection failure is the steady state while the user aims the camera, so
//! a miss is `None`, never an error. Detector-internal exceptions are
//! swallowed the same way; one bad frame must not kill a session.

use tracing::trace;

use crate::camera::Frame;

/// Decodes symbols out of single camera frames.
pub trait FrameDecoder: Send + Sync {
    /// Returns the decoded payload text, or `None` when the frame holds no
    /// readable symbol.
    fn decode(&self, frame: &Frame) -> Option<String>;
}

// =============================================================================
// rxing Decoder
// =============================================================================

/// Production decoder backed by rxing's Code 128 detector.
#[derive(Debug, Default)]
pub struct RxingDecoder;

impl RxingDecoder {
    pub fn new() -> Self {
        RxingDecoder
    }
}

impl FrameDecoder for RxingDecoder {
    fn decode(&self, frame: &Frame) -> Option<String> {
        match rxing::helpers::detect_in_luma(
            frame.luma.clone(),
            frame.width,
            frame.height,
            Some(rxing::BarcodeFormat::CODE_128),
        ) {
            Ok(result) => {
                let text = result.getText().to_string();
                trace!(payload = %text, "Frame decoded");
                Some(text)
            }
            Err(_) => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_frame_is_a_miss() {
        let frame = Frame {
            luma: vec![255; 320 * 240],
            width: 320,
            height: 240,
        };
        assert_eq!(RxingDecoder::new().decode(&frame), None);
    }

    #[test]
    fn test_noise_frame_is_a_miss_not_a_panic() {
        let luma: Vec<u8> = (0..(160 * 120)).map(|i| (i * 97 % 251) as u8).collect();
        let frame = Frame {
            luma,
            width: 160,
            height: 120,
        };
        let _ = RxingDecoder::new().decode(&frame);
    }
}
