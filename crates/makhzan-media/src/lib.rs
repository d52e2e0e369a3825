//! # makhzan-media: Image & Symbol Pipelines
//!
//! Two pipelines live here, both pure in-memory compute:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Photo path                                                             │
//! │  picker/camera bytes ──► normalize ──► bounded JPEG ──► ImageData       │
//! │                                                                         │
//! │  Symbol path                                                            │
//! │  "ART-482917365" ──► encode (Code 128) ──► module runs                  │
//! │                              │                                          │
//! │                              ├──► rasterize ──► scannable bitmap        │
//! │                              └──► render_label ──► padded PNG + caption │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`normalize`] - Bound + recompress captured photos before persisting
//! - [`symbol`] - Code 128 encoding wrapper and bitmap rasterization
//! - [`label`] - Downloadable barcode label (symbol + caption + padding)
//! - [`error`] - Media error types

pub mod error;
pub mod label;
pub mod normalize;
pub mod symbol;

pub use error::{MediaError, MediaResult};
pub use label::{render_label, Label};
pub use normalize::{normalize, NormalizedImage, JPEG_QUALITY, MAX_DIMENSION};
pub use symbol::{encode, rasterize, Symbol};
