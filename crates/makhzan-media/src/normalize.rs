//! # Image Normalization
//!
//! Bounds and recompresses every product photo before it is persisted.
//!
//! ## Why Normalize At All
//! The catalog snapshot holds every product's image inline. An unbounded
//! 12-megapixel capture would bloat the snapshot by megabytes per record,
//! so every image is capped at 800 on its longer side and re-encoded as
//! JPEG at a fixed quality, even when no resize was needed. That keeps the
//! stored format uniform and the compression predictable.
//!
//! ## Pipeline
//! ```text
//! raw bytes ──decode──► pixels ──bound to 800──► pixels ──JPEG q75──► bytes
//!     │                                                                │
//!     └── any common raster encoding                   always JPEG ────┘
//! ```

use std::io::Cursor;

use image::imageops::FilterType;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::error::{MediaError, MediaResult};
use makhzan_core::ImageData;

// =============================================================================
// Constants
// =============================================================================

/// Neither output dimension ever exceeds this.
pub const MAX_DIMENSION: u32 = 800;

/// Fixed JPEG quality factor. Deliberate size/quality trade-off: the
/// snapshot stores every image inline, so storage footprint wins.
pub const JPEG_QUALITY: u8 = 75;

// =============================================================================
// Normalized Image
// =============================================================================

/// The result of normalization: encoded payload plus final pixel dimensions.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    /// Self-describing JPEG payload, always re-decodable.
    pub data: ImageData,
    pub width: u32,
    pub height: u32,
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalizes raw picker/camera bytes into a bounded JPEG payload.
///
/// ## Behavior
/// - decodes any common raster encoding; failure is [`MediaError::Decode`]
///   and the caller must keep the previous image (or reject creation)
/// - dimensions above 800 are scaled down preserving aspect ratio exactly;
///   within-bound inputs keep their dimensions
/// - output is always JPEG at quality 75, even when no resize occurred
pub fn normalize(raw: &[u8]) -> MediaResult<NormalizedImage> {
    let img = image::load_from_memory(raw).map_err(|e| MediaError::Decode(e.to_string()))?;

    let (orig_w, orig_h) = (img.width(), img.height());
    let img = if orig_w > MAX_DIMENSION || orig_h > MAX_DIMENSION {
        // resize() fits within the bounds while preserving aspect ratio
        img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Triangle)
    } else {
        img
    };

    // JPEG has no alpha channel; flatten whatever the decoder produced
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());

    let mut encoded = Vec::new();
    let mut cursor = Cursor::new(&mut encoded);
    let mut encoder = JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
    encoder
        .encode_image(&rgb)
        .map_err(|e| MediaError::Encode(e.to_string()))?;

    debug!(
        from = %format_args!("{orig_w}x{orig_h}"),
        to = %format_args!("{width}x{height}"),
        bytes = encoded.len(),
        "Normalized image"
    );

    Ok(NormalizedImage {
        data: ImageData::new(encoded),
        width,
        height,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage, Rgba, RgbaImage};

    /// Encodes a solid-color image of the given size as PNG bytes.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([180, 40, 90]),
        ));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn test_oversized_landscape_is_bounded_to_800() {
        let normalized = normalize(&png_bytes(1600, 1200)).unwrap();
        assert_eq!(normalized.width, 800);
        assert_eq!(normalized.height, 600);
    }

    #[test]
    fn test_oversized_portrait_is_bounded_to_800() {
        let normalized = normalize(&png_bytes(500, 2000)).unwrap();
        assert_eq!(normalized.height, 800);
        assert_eq!(normalized.width, 200);
    }

    #[test]
    fn test_within_bound_dimensions_are_preserved() {
        let normalized = normalize(&png_bytes(640, 480)).unwrap();
        assert_eq!((normalized.width, normalized.height), (640, 480));
    }

    #[test]
    fn test_output_always_redecodes_as_jpeg() {
        for (w, h) in [(100, 100), (801, 799), (2048, 64)] {
            let normalized = normalize(&png_bytes(w, h)).unwrap();
            let decoded = image::load_from_memory(normalized.data.as_bytes()).unwrap();
            assert!(decoded.width() <= MAX_DIMENSION);
            assert!(decoded.height() <= MAX_DIMENSION);
            assert_eq!(
                image::guess_format(normalized.data.as_bytes()).unwrap(),
                ImageFormat::Jpeg
            );
        }
    }

    #[test]
    fn test_already_small_input_is_still_reencoded() {
        // A PNG in, a JPEG out, even with no resize
        let normalized = normalize(&png_bytes(64, 64)).unwrap();
        assert_eq!(
            image::guess_format(normalized.data.as_bytes()).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_alpha_input_is_flattened() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            32,
            32,
            Rgba([10, 20, 30, 128]),
        ));
        let mut raw = Vec::new();
        img.write_to(&mut Cursor::new(&mut raw), ImageFormat::Png)
            .unwrap();

        let normalized = normalize(&raw).unwrap();
        assert!(image::load_from_memory(normalized.data.as_bytes()).is_ok());
    }

    #[test]
    fn test_garbage_input_is_a_decode_error() {
        let err = normalize(b"definitely not an image").unwrap_err();
        assert!(matches!(err, MediaError::Decode(_)));
    }

    #[test]
    fn test_empty_input_is_a_decode_error() {
        assert!(matches!(normalize(&[]).unwrap_err(), MediaError::Decode(_)));
    }
}
