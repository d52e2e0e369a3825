//! # Barcode Label Rendering
//!
//! Produces the downloadable label for a product: its symbol rendered as
//! black bars on a white card, the payload as a caption underneath, and a
//! fixed margin all around.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────────────┐  ▲
//! │                                      │  │ padding (20)
//! │   █ ██ █ ███ █ █ ██ ████ █ ██ ███    │  ▲
//! │   █ ██ █ ███ █ █ ██ ████ █ ██ ███    │  │ bars (60)
//! │   █ ██ █ ███ █ █ ██ ████ █ ██ ███    │  ▼
//! │                                      │  │ gap (6)
//! │           ART-482917365              │  caption (14)
//! │                                      │  │ padding (20)
//! └──────────────────────────────────────┘  ▼
//! ```
//!
//! The caption is drawn with a built-in 5×7 bitmap face covering the payload
//! alphabet (digits, uppercase letters, hyphen). Payload text is machine
//! print, not typography; a font rasterizer dependency would be overkill
//! for 38 fixed glyphs.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use tracing::debug;

use crate::error::{MediaError, MediaResult};
use crate::symbol::{self, Symbol};

// =============================================================================
// Layout Constants
// =============================================================================

/// Printed width of one symbol module, in pixels.
const MODULE_WIDTH: u32 = 2;

/// Bar height in pixels.
const BAR_HEIGHT: u32 = 60;

/// Margin on every side of the card.
const PADDING: u32 = 20;

/// Vertical gap between bars and caption.
const CAPTION_GAP: u32 = 6;

/// Caption glyph magnification (5×7 base cell).
const GLYPH_SCALE: u32 = 2;

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
/// One blank column between glyphs, pre-scale.
const GLYPH_ADVANCE: u32 = GLYPH_W + 1;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

// =============================================================================
// Label
// =============================================================================

/// A rendered, downloadable barcode label.
#[derive(Debug, Clone)]
pub struct Label {
    /// Suggested download name: `Barcode-{product name}-{payload}.png`.
    pub file_name: String,
    /// PNG-encoded card.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Renders the label card for a product.
///
/// `name` only feeds the file name; the caption is always the payload, so a
/// scan of the printed label and a read of its caption agree.
pub fn render_label(name: &str, payload: &str) -> MediaResult<Label> {
    let sym = symbol::encode(payload)?;
    let (png, width, height) = draw_card(&sym)?;

    let file_name = format!("Barcode-{}-{}.png", sanitize_file_stem(name), payload);
    debug!(file_name, width, height, "Rendered barcode label");

    Ok(Label {
        file_name,
        png,
        width,
        height,
    })
}

fn draw_card(sym: &Symbol) -> MediaResult<(Vec<u8>, u32, u32)> {
    let bars_w = sym.width() as u32 * MODULE_WIDTH;
    let caption_h = GLYPH_H * GLYPH_SCALE;
    let caption_w = sym.payload().chars().count() as u32 * GLYPH_ADVANCE * GLYPH_SCALE;

    let width = bars_w.max(caption_w) + 2 * PADDING;
    let height = PADDING + BAR_HEIGHT + CAPTION_GAP + caption_h + PADDING;

    let mut img = RgbImage::from_pixel(width, height, WHITE);

    // bars, centered horizontally
    let bars_x0 = (width - bars_w) / 2;
    for (i, module) in sym.modules().iter().enumerate() {
        if *module == 1 {
            let x0 = bars_x0 + i as u32 * MODULE_WIDTH;
            for x in x0..x0 + MODULE_WIDTH {
                for y in PADDING..PADDING + BAR_HEIGHT {
                    img.put_pixel(x, y, BLACK);
                }
            }
        }
    }

    // caption, centered under the bars
    let caption_x0 = (width - caption_w) / 2;
    let caption_y0 = PADDING + BAR_HEIGHT + CAPTION_GAP;
    for (i, ch) in sym.payload().chars().enumerate() {
        draw_glyph(
            &mut img,
            ch,
            caption_x0 + i as u32 * GLYPH_ADVANCE * GLYPH_SCALE,
            caption_y0,
        );
    }

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| MediaError::Encode(e.to_string()))?;
    Ok((png, width, height))
}

fn draw_glyph(img: &mut RgbImage, ch: char, x0: u32, y0: u32) {
    let rows = glyph_rows(ch);
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_W {
            if bits & (0x10 >> col) != 0 {
                for dy in 0..GLYPH_SCALE {
                    for dx in 0..GLYPH_SCALE {
                        img.put_pixel(
                            x0 + col * GLYPH_SCALE + dx,
                            y0 + row as u32 * GLYPH_SCALE + dy,
                            BLACK,
                        );
                    }
                }
            }
        }
    }
}

/// Keeps a product name usable as a file stem.
fn sanitize_file_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    if cleaned.is_empty() {
        "item".to_string()
    } else {
        cleaned
    }
}

// =============================================================================
// Built-in 5×7 Face
// =============================================================================

/// Row bitmaps (5 LSB-aligned bits per row, MSB = leftmost column) for the
/// payload alphabet. Unknown characters render as blanks.
fn glyph_rows(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '-' => [0x00, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x00],
        _ => [0x00; 7],
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_file_name() {
        let label = render_label("Velvet dress", "ART-123456789").unwrap();
        assert_eq!(label.file_name, "Barcode-Velvet dress-ART-123456789.png");
    }

    #[test]
    fn test_label_file_name_is_sanitized() {
        let label = render_label("a/b:c", "ART-123456789").unwrap();
        assert_eq!(label.file_name, "Barcode-a-b-c-ART-123456789.png");
    }

    #[test]
    fn test_label_png_decodes_with_expected_geometry() {
        let label = render_label("Dress", "ART-123456789").unwrap();
        let img = image::load_from_memory(&label.png).unwrap();
        assert_eq!(img.width(), label.width);
        assert_eq!(img.height(), label.height);
        // fixed vertical layout: padding + bars + gap + caption + padding
        assert_eq!(label.height, 20 + 60 + 6 + 14 + 20);
    }

    #[test]
    fn test_label_card_is_white_with_black_marks() {
        let label = render_label("Dress", "ART-123456789").unwrap();
        let img = image::load_from_memory(&label.png).unwrap().to_rgb8();
        // margins stay white
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(label.width - 1, label.height - 1), WHITE);
        // some bar pixel is black inside the bar band
        let bar_band = (0..label.width).any(|x| *img.get_pixel(x, PADDING + 5) == BLACK);
        assert!(bar_band);
    }

    #[test]
    fn test_unencodable_payload_refuses_to_render() {
        assert!(render_label("Dress", "p\u{00e5}yload").is_err());
    }
}
