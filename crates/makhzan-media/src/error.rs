//! # Media Error Types
//!
//! Failures from the image and symbol pipelines.
//!
//! ## Caller Contract
//! `Decode` is the load-bearing variant: when a picked image fails to decode
//! the caller must NOT touch the record's existing image (or must reject
//! creation when there is no previous image). Everything else is an internal
//! encoding failure that should essentially never happen with valid input.

use thiserror::Error;

/// Media pipeline errors.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Input bytes are not decodable as a raster image.
    ///
    /// ## When This Occurs
    /// - Picker handed over a non-image file
    /// - Truncated camera capture
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// Re-encoding the normalized pixels failed.
    #[error("Image encode failed: {0}")]
    Encode(String),

    /// Payload cannot be represented in the Code 128 symbology.
    ///
    /// Generated payloads always encode; this surfaces only for codes that
    /// arrive from outside the generator.
    #[error("Symbol encode failed for payload {payload:?}: {reason}")]
    Symbol { payload: String, reason: String },
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;
