//! # Domain Types
//!
//! Core domain types used throughout Makhzan.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Product      │   │  ProductDraft   │   │    ImageData    │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (UUID)      │   │  name           │   │  JPEG bytes     │        │
//! │  │  barcode        │   │  price_cents    │   │  (base64 in     │        │
//! │  │  image          │   │  raw_image      │   │   the snapshot) │        │
//! │  │  price_cents    │   │  ...            │   └─────────────────┘        │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every record has:
//! - `id`: UUID v4 - immutable, the storage key for update/remove
//! - `barcode`: generated business identifier - immutable, the scan-lookup key

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::DEFAULT_UNITS_PER_DOZEN;

// =============================================================================
// Image Data
// =============================================================================

/// A self-contained encoded image payload (normalized JPEG bytes).
///
/// ## Serialization
/// The catalog snapshot is JSON, so the bytes serialize as a base64 string,
/// exactly like the data-URL payloads a browser build of this app would keep
/// in localStorage. No file-system references ever leave this type.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ImageData(Vec<u8>);

impl ImageData {
    /// Wraps already-encoded image bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        ImageData(bytes)
    }

    /// Returns the encoded bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Byte length of the encoded payload.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no payload is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the wrapper, returning the encoded bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl std::fmt::Debug for ImageData {
    // Dumping megabytes of JPEG into logs helps nobody
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImageData({} bytes)", self.0.len())
    }
}

impl Serialize for ImageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for ImageData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64
            .decode(encoded.as_bytes())
            .map(ImageData)
            .map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalogued inventory item.
///
/// ## Mutability Rules
/// - `id`, `barcode`, `created_at`: assigned once at creation, never changed
/// - `image`: replaceable after creation (re-normalized on every replace)
/// - everything else: free-text/numeric metadata, mutable via whole-record
///   replacement (the store never exposes partial field mutation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the inventory list and on labels.
    pub name: String,

    /// Generated barcode payload; the scan-lookup key.
    pub barcode: String,

    /// Normalized JPEG payload.
    pub image: ImageData,

    /// Price in minor currency units (never floats).
    pub price_cents: i64,

    /// Garment size, free text or one of [`PRESET_SIZES`].
    pub size: String,

    /// Color name, free text or one of [`PRESET_COLORS`].
    pub color: String,

    /// Pieces per dozen pack.
    pub units_per_dozen: u32,

    /// Free-text notes.
    pub description: String,

    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new record from validated draft fields, assigning identity.
    ///
    /// `barcode` comes from the code generator and `image` from the
    /// normalizer; this constructor only stamps `id` and `created_at`.
    pub fn new(draft: ProductDraft, barcode: String, image: ImageData) -> Self {
        Product {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            barcode,
            image,
            price_cents: draft.price_cents,
            size: draft.size,
            color: draft.color,
            units_per_dozen: draft.units_per_dozen,
            description: draft.description,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// User-supplied input for creating a product.
///
/// The raw image bytes come straight from the picker/camera and have not
/// been normalized yet; validation checks presence, the media layer checks
/// decodability.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price_cents: i64,
    pub size: String,
    pub color: String,
    pub units_per_dozen: u32,
    pub description: String,
    /// Raw picker/camera bytes, any common raster encoding.
    pub raw_image: Vec<u8>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        ProductDraft {
            name: String::new(),
            price_cents: 0,
            size: String::new(),
            color: String::new(),
            units_per_dozen: DEFAULT_UNITS_PER_DOZEN,
            description: String::new(),
            raw_image: Vec::new(),
        }
    }
}

// =============================================================================
// Entry-Form Presets
// =============================================================================

/// Garment sizes offered as one-tap choices in the entry form.
/// Free text remains allowed; nothing enforces this set at storage.
pub const PRESET_SIZES: [&str; 6] = ["S", "M", "L", "XL", "XXL", "3XL"];

/// A preset color choice (display name + swatch hex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Color swatches offered in the entry form.
pub const PRESET_COLORS: [PresetColor; 7] = [
    PresetColor { name: "Black", hex: "#000000" },
    PresetColor { name: "White", hex: "#FFFFFF" },
    PresetColor { name: "Red", hex: "#EF4444" },
    PresetColor { name: "Blue", hex: "#3B82F6" },
    PresetColor { name: "Green", hex: "#10B981" },
    PresetColor { name: "Gray", hex: "#6B7280" },
    PresetColor { name: "Brown", hex: "#78350F" },
];

// =============================================================================
// Unit Tests
// =============================================================================
