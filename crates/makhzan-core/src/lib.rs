//! # makhzan-core: Pure Domain Logic for Makhzan
//!
//! This crate is the **heart** of Makhzan. It contains the domain model and
//! the two small algorithms everything else hangs off: barcode payload
//! generation and catalog lookup resolution. No I/O happens here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Makhzan Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       makhzan-app                               │   │
//! │  │    navigation ──► create/scan flows ──► boundary errors         │   │
//! │  └───────┬──────────────────┬──────────────────────┬───────────────┘   │
//! │          │                  │                      │                   │
//! │  ┌───────▼──────┐  ┌────────▼───────┐  ┌───────────▼──────┐            │
//! │  │ makhzan-media│  │ makhzan-store  │  │   makhzan-scan   │            │
//! │  │ image+symbol │  │ JSON snapshot  │  │  camera+decode   │            │
//! │  └───────┬──────┘  └────────┬───────┘  └───────────┬──────┘            │
//! │          │                  │                      │                   │
//! │  ┌───────▼──────────────────▼──────────────────────▼───────────────┐   │
//! │  │               ★ makhzan-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │   │
//! │  │   │   types   │  │  codegen  │  │  resolve  │  │ validation│    │   │
//! │  │   │  Product  │  │ ART-digits│  │  lookup   │  │   rules   │    │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CAMERA • NO FILE SYSTEM • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft, ImageData, presets)
//! - [`codegen`] - Barcode payload generation
//! - [`resolve`] - Scanned-code lookup resolution
//! - [`validation`] - Draft validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **No I/O**: camera, file system and network access are FORBIDDEN here
//! 2. **Injected randomness**: the code generator takes an `Rng`, never
//!    reaches for ambient entropy on its own
//! 3. **Integer money**: prices are minor units (i64), never floats
//! 4. **Explicit errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codegen;
pub mod error;
pub mod resolve;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use makhzan_core::Product` instead of
// `use makhzan_core::types::Product`

pub use error::{CoreError, CoreResult, ValidationError};
pub use resolve::resolve;
pub use types::{ImageData, Product, ProductDraft};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of the free-text description.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Default pack count per dozen.
///
/// ## Business Reason
/// Wholesale garment trade counts pieces per dozen; twelve is the
/// overwhelmingly common pack and is pre-filled in the entry form.
pub const DEFAULT_UNITS_PER_DOZEN: u32 = 12;
